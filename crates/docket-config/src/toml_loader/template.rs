//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Docket Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[theme]
# background = "#18222d"
# foreground = "#f5f5f5"
# muted = "#708499"
# accent = "#6ab2f2"
# surface_shade = 0.08          # 0.0-0.5
# divider_shade = 0.12          # 0.0-0.5
# control_shade = 0.16          # 0.0-0.5
# sync_host_colors = true

[routes]
# fragment_root = "pages"
# default_page = "cases"        # cases, hearings, tasks, profile
# remote_base = "https://app.example.com/docket"

[gestures]
# block_pinch = true
# block_double_tap = true
# block_wheel_zoom = true
# strict = false                # also block selection + context menu
# double_tap_threshold_ms = 300 # 50-2000

[persistence]
# enabled = true
# store_file = "fields.json"

[window]
# title = "Docket"
# width = 420.0                 # 200-4000
# height = 760.0                # 200-4000

[fetch]
# connect_timeout_secs = 10     # 1-120
# request_timeout_secs = 30     # 1-120

[logging]
# level = "INFO"                # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
