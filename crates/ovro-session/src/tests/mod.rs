mod commit;

use ovro_core::{SessionConfig, SurfaceGeometry, SurfaceKind, Transliterate};

pub(super) use simulator::HeadlessSurface;

pub(super) fn test_geometry() -> SurfaceGeometry {
    SurfaceGeometry {
        kind: SurfaceKind::SingleLine,
        origin_x: 0,
        origin_y: 0,
        content_width: 240,
        content_height: 16,
        cell_width: 8,
        line_height: 16,
    }
}

pub(super) fn test_config() -> SessionConfig {
    SessionConfig::default()
}

pub(super) fn config_with_value(initial: &str) -> SessionConfig {
    SessionConfig {
        initial_value: initial.to_string(),
        ..SessionConfig::default()
    }
}

/// Oracle built from a candidate-list function; slot 0 is the parse.
pub(super) struct ListOracle(pub fn(&str) -> Vec<String>);

impl Transliterate for ListOracle {
    fn parse(&self, token: &str) -> String {
        (self.0)(token).into_iter().next().unwrap_or_default()
    }

    fn candidates(&self, token: &str) -> Vec<String> {
        let list = (self.0)(token);
        if list.is_empty() {
            vec![String::new()]
        } else {
            list
        }
    }
}

/// Three fixed alternates for any non-empty token.
pub(super) fn xyz_oracle() -> ListOracle {
    ListOracle(|token| {
        if token.is_empty() {
            vec![String::new()]
        } else {
            vec!["X".to_string(), "Y".to_string(), "Z".to_string()]
        }
    })
}
