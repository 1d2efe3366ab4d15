use crate::ErrorLocation;
use crate::error::model_error::ModelError;

use std::fmt::{Display, Formatter, Result as FormatResult};
use std::panic::Location;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

const BBOX_FIELD_COUNT: usize = 4;

/// Geographic query rectangle.
///
/// `left`/`right` are longitudes of the western/eastern edges, `bottom`/`top`
/// the latitudes of the southern/northern edges. Rendered in the API's
/// `left,bottom,right,top` order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
}

impl BoundingBox {
    pub const fn new(left: f64, bottom: f64, right: f64, top: f64) -> Self {
        Self {
            left,
            bottom,
            right,
            top,
        }
    }
}

impl Display for BoundingBox {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        write!(
            formatter,
            "{},{},{},{}",
            self.left, self.bottom, self.right, self.top
        )
    }
}

impl FromStr for BoundingBox {
    type Err = ModelError;

    /// Parse `left,bottom,right,top`.
    #[track_caller]
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = input.split(',').map(str::trim).collect();

        if fields.len() != BBOX_FIELD_COUNT {
            return Err(ModelError::Validation {
                message: format!(
                    "Bounding box needs {BBOX_FIELD_COUNT} comma-separated values, got {}: {input}",
                    fields.len()
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut values = [0.0_f64; BBOX_FIELD_COUNT];
        for (slot, field) in values.iter_mut().zip(&fields) {
            *slot = field.parse().map_err(|_| ModelError::Validation {
                message: format!("Bounding box value is not a number: {field:?}"),
                location: ErrorLocation::from(Location::caller()),
            })?;
        }

        let [left, bottom, right, top] = values;
        Ok(Self::new(left, bottom, right, top))
    }
}
