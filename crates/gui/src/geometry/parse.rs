//! Text-field parsing for vertex lists, plane equations and rotation angles.

use glam::DVec3;

use crate::error::InputError;

/// Parse `[x, y, z], [x, y, z], ...` into points.
///
/// Brackets delimit points; commas and whitespace between them are ignored.
/// Every point needs exactly three finite numbers, and at least three points
/// are required.
pub fn parse_vertex_list(input: &str) -> Result<Vec<DVec3>, InputError> {
    if input.trim().is_empty() {
        return Err(InputError::EmptyVertexList);
    }

    let mut points = Vec::new();
    for chunk in input.split(']') {
        let chunk = chunk.trim_start_matches(|c: char| c == ',' || c.is_whitespace());
        if chunk.trim().is_empty() {
            continue;
        }
        let index = points.len() + 1;
        let malformed = || InputError::MalformedVertex {
            index,
            text: chunk.trim().to_string(),
        };

        let body: String = chunk.chars().filter(|&c| c != '[').collect();
        let coords = body
            .split(',')
            .map(parse_number)
            .collect::<Option<Vec<f64>>>()
            .ok_or_else(malformed)?;
        let [x, y, z] = coords[..] else {
            return Err(malformed());
        };
        points.push(DVec3::new(x, y, z));
    }

    if points.is_empty() {
        return Err(InputError::EmptyVertexList);
    }
    if points.len() < 3 {
        return Err(InputError::TooFewPoints(points.len()));
    }
    Ok(points)
}

/// Parse `A, B, C, D`.
pub fn parse_plane_input(input: &str) -> Result<[f64; 4], InputError> {
    let values = input
        .split(',')
        .map(parse_number)
        .collect::<Option<Vec<f64>>>()
        .ok_or(InputError::InvalidPlane)?;
    values.try_into().map_err(|_| InputError::InvalidPlane)
}

/// Parse a rotation angle in degrees.
pub fn parse_angle(input: &str) -> Result<f64, InputError> {
    parse_number(input).ok_or_else(|| InputError::InvalidAngle(input.trim().to_string()))
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tetrahedron_vertices() {
        let points = parse_vertex_list("[1,0,0], [0,1,0], [0,0,1], [0,0,0]").unwrap();
        assert_eq!(points.len(), 4);
        assert_eq!(points[0], DVec3::X);
        assert_eq!(points[3], DVec3::ZERO);
    }

    #[test]
    fn test_whitespace_and_decimals() {
        let points = parse_vertex_list("  [ 1.5, -2 , 3e1 ]  [0,0,0],[ -0.25,4,  5 ]\n").unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], DVec3::new(1.5, -2.0, 30.0));
        assert_eq!(points[2], DVec3::new(-0.25, 4.0, 5.0));
    }

    #[test]
    fn test_missing_brackets_still_separate_points() {
        // The closing bracket is the separator
        let points = parse_vertex_list("1,0,0], 0,1,0], 0,0,1]").unwrap();
        assert_eq!(points.len(), 3);
    }

    #[test]
    fn test_two_points_rejected() {
        let err = parse_vertex_list("[0,0,0], [1,1,1]").unwrap_err();
        assert_eq!(err, InputError::TooFewPoints(2));
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(parse_vertex_list("").unwrap_err(), InputError::EmptyVertexList);
        assert_eq!(parse_vertex_list("   \n").unwrap_err(), InputError::EmptyVertexList);
        assert_eq!(parse_vertex_list("], ]").unwrap_err(), InputError::EmptyVertexList);
    }

    #[test]
    fn test_wrong_arity_rejected() {
        let err = parse_vertex_list("[1,0,0], [0,1], [0,0,1]").unwrap_err();
        assert!(matches!(err, InputError::MalformedVertex { index: 2, .. }));

        let err = parse_vertex_list("[1,0,0,4], [0,1,0], [0,0,1]").unwrap_err();
        assert!(matches!(err, InputError::MalformedVertex { index: 1, .. }));
    }

    #[test]
    fn test_non_numeric_rejected() {
        let err = parse_vertex_list("[1,0,0], [0,a,0], [0,0,1]").unwrap_err();
        assert_eq!(
            err,
            InputError::MalformedVertex {
                index: 2,
                text: "[0,a,0".to_string()
            }
        );
        assert!(parse_vertex_list("[1,,0], [0,1,0], [0,0,1]").is_err());
        assert!(parse_vertex_list("[inf,0,0], [0,1,0], [0,0,1]").is_err());
    }

    #[test]
    fn test_plane_input() {
        assert_eq!(parse_plane_input("0, 0, 1, 0").unwrap(), [0.0, 0.0, 1.0, 0.0]);
        assert_eq!(parse_plane_input(" 1,-2.5,3 ,4 ").unwrap(), [1.0, -2.5, 3.0, 4.0]);
        assert_eq!(parse_plane_input("0, 0, 1").unwrap_err(), InputError::InvalidPlane);
        assert_eq!(parse_plane_input("0, 0, 1, 0, 0").unwrap_err(), InputError::InvalidPlane);
        assert_eq!(parse_plane_input("a, 0, 1, 0").unwrap_err(), InputError::InvalidPlane);
        assert_eq!(parse_plane_input("").unwrap_err(), InputError::InvalidPlane);
    }

    #[test]
    fn test_angle() {
        assert_eq!(parse_angle("90").unwrap(), 90.0);
        assert_eq!(parse_angle(" -12.5 ").unwrap(), -12.5);
        assert_eq!(
            parse_angle("abc").unwrap_err(),
            InputError::InvalidAngle("abc".to_string())
        );
        assert!(parse_angle("").is_err());
        assert!(parse_angle("NaN").is_err());
    }
}
