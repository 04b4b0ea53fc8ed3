//! Package-name validation.
//!
//! The generated project's `package.json` name comes from the destination
//! directory, so the directory name has to be a name a package registry
//! accepts for *new* packages. Rules that make a name unusable are errors;
//! rules that only discourage a name are warnings.

/// Maximum length of a package name.
pub const MAX_NAME_LENGTH: usize = 214;

/// Names that are never valid, regardless of case.
const BLOCKED_NAMES: &[&str] = &["node_modules", "favicon.ico"];

/// Characters registries still accept but discourage.
const SPECIAL_CHARACTERS: &[char] = &['~', '\'', '!', '(', ')', '*'];

/// Node.js core modules; a package with one of these names would shadow it.
const CORE_MODULES: &[&str] = &[
    "assert",
    "async_hooks",
    "buffer",
    "child_process",
    "cluster",
    "console",
    "constants",
    "crypto",
    "dgram",
    "diagnostics_channel",
    "dns",
    "domain",
    "events",
    "fs",
    "http",
    "http2",
    "https",
    "inspector",
    "module",
    "net",
    "os",
    "path",
    "perf_hooks",
    "process",
    "punycode",
    "querystring",
    "readline",
    "repl",
    "stream",
    "string_decoder",
    "sys",
    "timers",
    "tls",
    "trace_events",
    "tty",
    "url",
    "util",
    "v8",
    "vm",
    "wasi",
    "worker_threads",
    "zlib",
];

/// Outcome of validating a candidate package name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameValidation {
    /// Problems that make the name unusable.
    pub errors: Vec<String>,
    /// Problems that are legal but discouraged.
    pub warnings: Vec<String>,
}

impl NameValidation {
    /// `true` when no hard error was found.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate `name` against package-identifier rules.
pub fn validate_package_name(name: &str) -> NameValidation {
    let mut result = NameValidation::default();

    if name.is_empty() {
        result
            .errors
            .push("name length must be greater than zero".into());
        return result;
    }

    if name.starts_with('.') {
        result.errors.push("name cannot start with a period".into());
    }
    if name.starts_with('_') {
        result
            .errors
            .push("name cannot start with an underscore".into());
    }
    if name.trim() != name {
        result
            .errors
            .push("name cannot contain leading or trailing spaces".into());
    }

    let lowered = name.to_lowercase();
    if BLOCKED_NAMES.contains(&lowered.as_str()) {
        result
            .errors
            .push(format!("{name} is not a valid package name"));
    }
    if CORE_MODULES.contains(&name) {
        result.errors.push(format!("{name} is a core module name"));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        result.errors.push(format!(
            "name cannot contain more than {MAX_NAME_LENGTH} characters"
        ));
    }
    if lowered != name {
        result
            .errors
            .push("name cannot contain capital letters".into());
    }

    let last_segment = name.rsplit('/').next().unwrap_or(name);
    if last_segment.contains(SPECIAL_CHARACTERS) {
        result
            .warnings
            .push("name should not contain special characters (\"~'!()*\")".into());
    }

    if !is_url_safe(name) && !is_scoped_url_safe(name) {
        result
            .errors
            .push("name can only contain URL-friendly characters".into());
    }

    result
}

/// Characters that survive URI-component encoding unchanged.
fn is_url_safe(s: &str) -> bool {
    s.chars().all(|c| {
        c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '!' | '~' | '*' | '\'' | '(' | ')')
    })
}

/// `@scope/name`, where both halves are URL-safe and non-empty.
fn is_scoped_url_safe(s: &str) -> bool {
    let Some(rest) = s.strip_prefix('@') else {
        return false;
    };
    match rest.split_once('/') {
        Some((scope, pkg)) => {
            !scope.is_empty() && !pkg.is_empty() && is_url_safe(scope) && is_url_safe(pkg)
        }
        None => false,
    }
}
