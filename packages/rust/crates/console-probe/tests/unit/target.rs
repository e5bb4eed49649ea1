use std::time::Duration;

use super::ProbeTarget;

#[test]
fn default_target_points_at_local_console_with_guest_login() {
    let target = ProbeTarget::default();
    assert_eq!(target.base_url, "http://localhost:15672");
    assert_eq!(target.username, "guest");
    assert_eq!(target.password, "guest");
    assert_eq!(target.timeout, Duration::from_secs(10));
    assert_eq!(target.title_marker, "RabbitMQ Management");
}

#[test]
fn endpoint_url_maps_root_to_base_url() {
    let target = ProbeTarget::default();
    assert_eq!(target.endpoint_url("/"), "http://localhost:15672");
    assert_eq!(target.endpoint_url(""), "http://localhost:15672");
}

#[test]
fn endpoint_url_joins_paths_without_double_slashes() {
    let target = ProbeTarget::with_base_url("http://127.0.0.1:9999/");
    assert_eq!(target.base_url, "http://127.0.0.1:9999");
    assert_eq!(
        target.endpoint_url("/api/overview"),
        "http://127.0.0.1:9999/api/overview"
    );
    assert_eq!(
        target.endpoint_url("css/main.css"),
        "http://127.0.0.1:9999/css/main.css"
    );
}
