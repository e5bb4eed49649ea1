use super::CheckKind;
use crate::client::Auth;

#[test]
fn checks_run_homepage_api_script_stylesheet() {
    let paths: Vec<&str> = CheckKind::ALL.iter().map(|kind| kind.path()).collect();
    assert_eq!(paths, vec!["/", "/api/overview", "/js/main.js", "/css/main.css"]);
}

#[test]
fn only_api_overview_sends_credentials() {
    for kind in CheckKind::ALL {
        let expected = if kind == CheckKind::ApiOverview {
            Auth::Basic
        } else {
            Auth::Anonymous
        };
        assert_eq!(kind.auth(), expected, "{kind:?}");
    }
}
