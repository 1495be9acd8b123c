//! Candidate endpoint lists for Business Central metadata.
//!
//! Each function returns candidates in priority order. Admin center URLs use
//! [`ADMIN_API_VERSION`]; tenant, environment and company values are
//! percent-encoded path segments.

use bc_config::constants::ADMIN_API_VERSION;

use crate::endpoints::encode_path_segment;
use crate::probe::EndpointCandidate;

/// Candidates that list the environments of the tenant the token was issued for.
pub fn environment_candidates(api_base_url: &str) -> Vec<EndpointCandidate> {
    let admin = format!("{api_base_url}/admin/{ADMIN_API_VERSION}/applications");
    vec![
        EndpointCandidate::new("Admin API: environments", format!("{admin}/environments")),
        EndpointCandidate::new(
            "Admin API: Business Central environments",
            format!("{admin}/businesscentral/environments"),
        ),
    ]
}

/// Candidates that list the companies of an environment.
pub fn company_candidates(
    api_base_url: &str,
    bc_tenant: &str,
    environment: &str,
) -> Vec<EndpointCandidate> {
    let tenant = encode_path_segment(bc_tenant);
    let env = encode_path_segment(environment);
    vec![
        EndpointCandidate::new(
            "API v2.0 companies",
            format!("{api_base_url}/v2.0/{tenant}/{env}/api/v2.0/companies"),
        ),
        EndpointCandidate::new(
            "API v2.0 companies (tenant from token)",
            format!("{api_base_url}/v2.0/{env}/api/v2.0/companies"),
        ),
        EndpointCandidate::new(
            "API v1.0 companies",
            format!("{api_base_url}/v2.0/{tenant}/{env}/api/v1.0/companies"),
        ),
    ]
}

/// Candidates that list the extensions installed in an environment.
///
/// The automation API fallback needs a company and is only included when
/// `company_id` is given and non-blank.
pub fn installed_app_candidates(
    api_base_url: &str,
    bc_tenant: &str,
    environment: &str,
    company_id: Option<&str>,
) -> Vec<EndpointCandidate> {
    let env = encode_path_segment(environment);
    let mut candidates = vec![EndpointCandidate::new(
        "Admin API: installed apps",
        format!(
            "{api_base_url}/admin/{ADMIN_API_VERSION}/applications/businesscentral/environments/{env}/apps"
        ),
    )];

    if let Some(company_id) = company_id.map(str::trim).filter(|id| !id.is_empty()) {
        let tenant = encode_path_segment(bc_tenant);
        let company = encode_path_segment(company_id);
        candidates.push(EndpointCandidate::new(
            "Automation API: extensions",
            format!(
                "{api_base_url}/v2.0/{tenant}/{env}/api/microsoft/automation/v2.0/companies({company})/extensions"
            ),
        ));
    }

    candidates
}
