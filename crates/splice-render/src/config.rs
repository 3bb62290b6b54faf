/// Configuration for rendering a decoded pattern.
///
/// ```text
/// ┌────────────────┬────────────────────────────────────────────────┐
/// │ Field          │ Purpose                                        │
/// ├────────────────┼────────────────────────────────────────────────┤
/// │ mode           │ Text (step grid) or JSON                       │
/// │ include_tracks │ Optional allowlist of track ids to render      │
/// └────────────────┴────────────────────────────────────────────────┘
/// ```
///
/// When `include_tracks` is `None`, every track is rendered. When
/// `Some(ids)`, only tracks whose id is listed appear; the version and
/// tempo lines are always present.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderConfig {
    pub mode: OutputMode,
    pub include_tracks: Option<Vec<u8>>,
}

impl RenderConfig {
    /// Whether a track with `id` passes the `include_tracks` filter.
    pub fn includes(&self, id: u8) -> bool {
        self.include_tracks
            .as_ref()
            .is_none_or(|ids| ids.contains(&id))
    }
}

/// Output formats.
///
/// ```text
/// ┌──────┬──────────────────────────────────────────────────┐
/// │ Mode │ Example                                          │
/// ├──────┼──────────────────────────────────────────────────┤
/// │ Text │ (0) kick\t|x---|x---|x---|x---|                  │
/// │ Json │ {"version":"0.808-alpha","tempo":120.0,...}      │
/// └──────┴──────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_renders_everything_as_text() {
        let config = RenderConfig::default();
        assert_eq!(config.mode, OutputMode::Text);
        assert!(config.includes(0));
        assert!(config.includes(255));
    }

    #[test]
    fn allowlist_filters_ids() {
        let config = RenderConfig {
            include_tracks: Some(vec![1, 3]),
            ..RenderConfig::default()
        };
        assert!(config.includes(3));
        assert!(!config.includes(2));
    }

    #[test]
    fn empty_allowlist_excludes_all() {
        let config = RenderConfig {
            include_tracks: Some(vec![]),
            ..RenderConfig::default()
        };
        assert!(!config.includes(0));
    }
}
