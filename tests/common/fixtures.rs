//! Test fixtures - Python sources following the apps/<domain> layout.

use super::TestProject;

/// A user service that calls into the log domain's service layer (allowed)
pub const USER_SERVICES_CALLING_LOG: &str = r#"from apps.log.services import record_event


def register_user(email):
    record_event("register", email)
    return email
"#;

pub const LOG_SERVICES: &str = r#"from .selectors import recent_events


def record_event(kind, payload):
    return (kind, payload)


def latest():
    return recent_events()
"#;

pub const LOG_SELECTORS: &str = r#"def recent_events():
    return []


def list_logs(user_id):
    return []
"#;

/// A user API module reading another domain's selectors (denied)
pub const USER_API_CALLING_LOG_SELECTOR: &str = r#"from apps.log.selectors import list_logs


def get_logs(request, user_id):
    return list_logs(user_id)
"#;

/// A selector calling a service (denied: no rule for selector -> service)
pub const USER_SELECTORS_CALLING_SERVICE: &str = r#"from apps.user import services


def get_user(user_id):
    return services.register_user(user_id)
"#;

pub const USER_API_CLEAN: &str = r#"from .services import register_user


def post_user(request):
    return register_user(request.email)
"#;

/// Policy with two rules for the same (service, selector) pair
pub const CONFLICTING_POLICY_TOML: &str = r#"[[policy]]
from = "service"
to = "selector"
scope = "same-domain"

[[policy]]
from = "api"
to = "service"
scope = "same-domain"

[[policy]]
from = "service"
to = "selector"
scope = "any"
"#;

/// A project where every reference is allowed
pub fn clean_project() -> TestProject {
    TestProject::new()
        .with_file("apps/user/api.py", USER_API_CLEAN)
        .with_file("apps/user/services.py", USER_SERVICES_CALLING_LOG)
        .with_file("apps/log/services.py", LOG_SERVICES)
        .with_file("apps/log/selectors.py", LOG_SELECTORS)
}

/// `clean_project` plus one cross-domain api -> selector call
pub fn violating_project() -> TestProject {
    clean_project().with_file("apps/user/api.py", USER_API_CALLING_LOG_SELECTOR)
}
