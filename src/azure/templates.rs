use anyhow::{Context, Result};
use serde_json::{json, Value};

const STANDARD_TEMPLATE: &str = include_str!("../../templates/webapp.json");
const GIT_TEMPLATE: &str = include_str!("../../templates/webapp-git.json");
const LINUX_TEMPLATE: &str = include_str!("../../templates/webapp-linux.json");

/// Caller-selected provisioning options for `createWebApp`.
#[derive(Debug, Clone, Default)]
pub struct WebAppOptions {
    pub enable_git: bool,
    pub repo_url: Option<String>,
    pub linux: bool,
}

/// The three provisioning template variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Standard,
    Git,
    Linux,
}

impl TemplateKind {
    /// Selection precedence: Linux beats an external repo URL, which beats
    /// the standard template.
    pub fn select(options: &WebAppOptions) -> Self {
        if options.linux {
            TemplateKind::Linux
        } else if options.repo_url.is_some() {
            TemplateKind::Git
        } else {
            TemplateKind::Standard
        }
    }

    pub fn body(self) -> Result<Value> {
        let source = match self {
            TemplateKind::Standard => STANDARD_TEMPLATE,
            TemplateKind::Git => GIT_TEMPLATE,
            TemplateKind::Linux => LINUX_TEMPLATE,
        };
        serde_json::from_str(source).context("embedded template is not valid JSON")
    }
}

/// Source-control mode baked into the site config: LocalGit only when the
/// caller asked for git integration without supplying an external repo.
pub fn scm_type(options: &WebAppOptions) -> &'static str {
    if options.enable_git && options.repo_url.is_none() {
        "LocalGit"
    } else {
        "None"
    }
}

/// ARM parameter object for the selected template: `webAppName` plus either
/// `gitUrl` (external repo) or `scmType`.
pub fn deployment_parameters(app_name: &str, options: &WebAppOptions) -> Value {
    let mut parameters = json!({
        "webAppName": { "value": app_name }
    });

    if let Some(repo_url) = &options.repo_url {
        parameters["gitUrl"] = json!({ "value": repo_url });
    } else {
        parameters["scmType"] = json!({ "value": scm_type(options) });
    }

    parameters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(enable_git: bool, repo_url: Option<&str>, linux: bool) -> WebAppOptions {
        WebAppOptions {
            enable_git,
            repo_url: repo_url.map(String::from),
            linux,
        }
    }

    #[test]
    fn test_linux_takes_precedence_over_repo_url() {
        let opts = options(true, Some("https://github.com/acme/app.git"), true);
        assert_eq!(TemplateKind::select(&opts), TemplateKind::Linux);
    }

    #[test]
    fn test_repo_url_selects_git_template() {
        let opts = options(false, Some("https://github.com/acme/app.git"), false);
        assert_eq!(TemplateKind::select(&opts), TemplateKind::Git);
    }

    #[test]
    fn test_default_template_without_flags() {
        assert_eq!(
            TemplateKind::select(&options(false, None, false)),
            TemplateKind::Standard
        );
        assert_eq!(
            TemplateKind::select(&options(true, None, false)),
            TemplateKind::Standard
        );
    }

    #[test]
    fn test_scm_type_local_git_only_without_external_repo() {
        assert_eq!(scm_type(&options(true, None, false)), "LocalGit");
        assert_eq!(
            scm_type(&options(true, Some("https://github.com/acme/app.git"), false)),
            "None"
        );
        assert_eq!(scm_type(&options(false, None, false)), "None");
    }

    #[test]
    fn test_parameters_carry_git_url_when_repo_supplied() {
        let opts = options(true, Some("https://github.com/acme/app.git"), false);
        let params = deployment_parameters("demo", &opts);
        assert_eq!(params["webAppName"]["value"], "demo");
        assert_eq!(params["gitUrl"]["value"], "https://github.com/acme/app.git");
        assert!(params.get("scmType").is_none());
    }

    #[test]
    fn test_parameters_carry_scm_type_otherwise() {
        let params = deployment_parameters("demo", &options(true, None, false));
        assert_eq!(params["scmType"]["value"], "LocalGit");
        assert!(params.get("gitUrl").is_none());
    }

    #[test]
    fn test_embedded_templates_parse() {
        for kind in [TemplateKind::Standard, TemplateKind::Git, TemplateKind::Linux] {
            let body = kind.body().unwrap();
            assert!(body["parameters"]["webAppName"].is_object());
        }
    }
}
