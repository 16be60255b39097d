//! Battlefield geometry payload: JSON parsing and validation.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// A line-segment wireframe: 3D vertices plus edge index pairs.
/// The simulation core only consumes the counts; the vertex data is
/// opaque render-layer input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireModel {
    pub vertices: Vec<[f32; 3]>,
    pub edges: Vec<[u16; 2]>,
}

impl WireModel {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// The complete battlefield asset payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattlefieldData {
    /// Flat vertex array for the obstacle cube template (x, y, z
    /// triples).
    pub cube_positions: Vec<f32>,
    /// Enemy tank wireframe.
    pub enemy_tank: WireModel,
}

/// Load and validate a battlefield payload from a JSON file.
pub fn load_battlefield(path: &Path) -> io::Result<BattlefieldData> {
    let data = std::fs::read(path)?;
    parse_battlefield(&data)
}

/// Parse and validate a battlefield payload from a byte buffer.
pub fn parse_battlefield(data: &[u8]) -> io::Result<BattlefieldData> {
    let parsed: BattlefieldData = serde_json::from_slice(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    validate(&parsed)?;
    Ok(parsed)
}

/// Reject payloads the simulation cannot start from.
fn validate(data: &BattlefieldData) -> io::Result<()> {
    if data.cube_positions.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "Empty cube position template",
        ));
    }
    if data.cube_positions.len() % 3 != 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "Cube template length {} is not a multiple of 3",
                data.cube_positions.len()
            ),
        ));
    }

    let tank = &data.enemy_tank;
    if tank.vertices.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "Enemy tank wireframe has no vertices",
        ));
    }
    if tank.edges.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "Enemy tank wireframe has no edges",
        ));
    }
    let vertex_count = tank.vertices.len();
    for edge in &tank.edges {
        for &index in edge {
            if index as usize >= vertex_count {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("Edge index {index} out of range ({vertex_count} vertices)"),
                ));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> String {
        r#"{
            "cubePositions": [
                -1.0, -1.0, -1.0,  1.0, -1.0, -1.0,
                 1.0,  1.0, -1.0, -1.0,  1.0, -1.0
            ],
            "enemyTank": {
                "vertices": [[0.0, 0.0, 1.0], [-0.5, 0.0, -1.0], [0.5, 0.0, -1.0]],
                "edges": [[0, 1], [1, 2], [2, 0]]
            }
        }"#
        .to_string()
    }

    #[test]
    fn test_parse_valid_payload() {
        let data = parse_battlefield(valid_payload().as_bytes()).unwrap();
        assert_eq!(data.cube_positions.len(), 12);
        assert_eq!(data.enemy_tank.vertex_count(), 3);
        assert_eq!(data.enemy_tank.edge_count(), 3);
    }

    #[test]
    fn test_reject_malformed_json() {
        let err = parse_battlefield(b"not json at all").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_reject_ragged_cube_template() {
        let payload = valid_payload().replace(
            "-1.0, -1.0, -1.0,  1.0, -1.0, -1.0,",
            "-1.0, -1.0, -1.0,  1.0, -1.0,",
        );
        let err = parse_battlefield(payload.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_reject_empty_vertices() {
        let payload = r#"{
            "cubePositions": [0.0, 0.0, 0.0],
            "enemyTank": { "vertices": [], "edges": [] }
        }"#;
        let err = parse_battlefield(payload.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_reject_edge_index_out_of_range() {
        let payload = valid_payload().replace("[2, 0]", "[2, 7]");
        let err = parse_battlefield(payload.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let payload = r#"{ "cubePositions": [0.0, 0.0, 0.0] }"#;
        let err = parse_battlefield(payload.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
