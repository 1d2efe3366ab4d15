use crate::{GpxUploadBuilder, ModelError, TraceVisibility};

fn valid_builder() -> GpxUploadBuilder {
    GpxUploadBuilder::default()
        .with_file_name("morning-ride.gpx")
        .with_contents(b"<gpx version=\"1.1\"></gpx>".to_vec())
        .with_description("Morning ride")
}

#[test]
fn given_complete_builder_when_building_then_returns_upload() {
    let upload = valid_builder()
        .with_tag("bike")
        .with_tag("commute")
        .with_visibility(TraceVisibility::Identifiable)
        .build()
        .unwrap();

    assert_eq!(upload.file_name, "morning-ride.gpx");
    assert_eq!(upload.tags_field(), "bike,commute");
    assert_eq!(upload.visibility.to_string(), "identifiable");
}

#[test]
fn given_no_visibility_when_building_then_defaults_to_private() {
    let upload = valid_builder().build().unwrap();

    assert_eq!(upload.visibility, TraceVisibility::Private);
}

/// **VALUE**: The server rejects uploads without a description; fail before the round trip.
#[test]
fn given_missing_description_when_building_then_returns_validation_error() {
    let builder = GpxUploadBuilder::default()
        .with_file_name("a.gpx")
        .with_contents(b"<gpx/>".to_vec());

    match builder.build() {
        Err(ModelError::Validation { message, .. }) => {
            assert_eq!(message, "Description is required");
        }
        Ok(upload) => panic!("expected validation error, got {upload:?}"),
    }
}

#[test]
fn given_empty_contents_when_building_then_returns_validation_error() {
    let result = valid_builder().with_contents(Vec::new()).build();

    let err = result.unwrap_err();
    assert!(err.to_string().contains("Trace contents cannot be empty"));
}

#[test]
fn given_tag_with_comma_when_building_then_returns_validation_error() {
    let result = valid_builder().with_tag("a,b").build();

    assert!(result.is_err());
}
