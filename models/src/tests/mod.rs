mod bounding_box;
mod gpx;
mod note;
