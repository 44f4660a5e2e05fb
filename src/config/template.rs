//! Default `layerguard.toml` written by `layerguard init`

/// Annotated configuration equivalent to `Config::default()`
pub const DEFAULT_CONFIG_TOML: &str = r#"# layerguard configuration
#
# Layers: api, service, selector, core, model.
# Scopes: same-domain, cross-domain, any.
# Any (from, to) pair not listed under [[policy]] is denied.

[project]
# Module roots; unit ids are dotted paths relative to these
roots = ["."]
include = ["**/*.py"]
exclude = ["**/migrations/**", "**/__pycache__/**", ".venv/**", "venv/**"]

[convention]
# Each directory matching a glob below is one domain, named after the directory
domains = ["apps/*"]
# Files under these directories are layer `core`
shared = ["apps/core"]

[[convention.layer]]
layer = "api"
patterns = ["api.py", "api/**/*.py"]

[[convention.layer]]
layer = "service"
patterns = ["services.py", "services/**/*.py"]

[[convention.layer]]
layer = "selector"
patterns = ["selectors.py", "selectors/**/*.py"]

[[convention.layer]]
layer = "model"
patterns = ["model.py", "models.py", "models/**/*.py"]

[[policy]]
from = "api"
to = "service"
scope = "same-domain"

[[policy]]
from = "api"
to = "selector"
scope = "same-domain"

[[policy]]
from = "service"
to = "selector"
scope = "same-domain"

[[policy]]
from = "service"
to = "service"
scope = "cross-domain"

[[policy]]
from = "selector"
to = "model"
scope = "same-domain"

[[policy]]
from = "api"
to = "core"
scope = "any"

[[policy]]
from = "service"
to = "core"
scope = "any"

[[policy]]
from = "selector"
to = "core"
scope = "any"

[[policy]]
from = "model"
to = "core"
scope = "any"

[[policy]]
from = "core"
to = "core"
scope = "any"

[report]
# Severity of references that cannot be resolved statically
unresolved = "warning"
# Lowest severity that fails `layerguard check`
severity_threshold = "error"
"#;
