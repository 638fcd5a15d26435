/// Default TOML config content with comments.
pub(super) fn default_config_toml() -> &'static str {
    r##"# wincache configuration
# Only override what you want to change -- missing fields use defaults.

[registry]
# What closing a window does while the app is running: "hide" or "close".
# Once the app starts quitting every close destroys the window.
close_behavior = "hide"

[logging]
# level = "info"         # trace, debug, info, warn, error

# Windows created at startup. Closing a window with
# triggers_app_quit = true quits the application.
[[windows]]
name = "main"
title = "wincache"
triggers_app_quit = true
# url = "https://example.com"
# width = 800            # 100-10000
# height = 600           # 100-10000
# visible = true
# resizable = true

# [[windows]]
# name = "settings"
# title = "Settings"
# visible = false
"##
}
