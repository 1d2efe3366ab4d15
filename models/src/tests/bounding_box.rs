use crate::{BoundingBox, ModelError};

/// **VALUE**: Verifies the `left,bottom,right,top` wire order.
///
/// **WHY THIS MATTERS**: Swapping any two edges still produces a syntactically valid box,
/// so the API answers with data for the wrong region instead of an error.
#[test]
fn given_bounding_box_when_displayed_then_uses_left_bottom_right_top_order() {
    let bbox = BoundingBox::new(1.0, 2.0, 3.0, 4.0);

    assert_eq!(bbox.to_string(), "1,2,3,4");
}

#[test]
fn given_fractional_coordinates_when_displayed_then_keeps_precision() {
    let bbox = BoundingBox::new(13.3777, 52.5162, 13.3783, 52.5167);

    assert_eq!(bbox.to_string(), "13.3777,52.5162,13.3783,52.5167");
}

#[test]
fn given_comma_separated_string_when_parsed_then_builds_bounding_box() {
    let bbox: BoundingBox = "-0.5, 51.25, 0.25, 51.75".parse().unwrap();

    assert_eq!(bbox, BoundingBox::new(-0.5, 51.25, 0.25, 51.75));
}

/// **BUG THIS CATCHES**: Would catch a parser that silently fills missing edges with zero.
#[test]
fn given_three_values_when_parsed_then_returns_validation_error() {
    let result = "1,2,3".parse::<BoundingBox>();

    match result {
        Err(ModelError::Validation { message, .. }) => {
            assert!(message.contains("got 3"), "unexpected message: {message}");
        }
        Ok(bbox) => panic!("expected validation error, got {bbox:?}"),
    }
}

#[test]
fn given_non_numeric_value_when_parsed_then_returns_validation_error() {
    let result = "1,2,east,4".parse::<BoundingBox>();

    let err = result.unwrap_err();
    assert!(err.to_string().contains("not a number"));
    assert!(err.to_string().contains("bounding_box.rs"));
}
