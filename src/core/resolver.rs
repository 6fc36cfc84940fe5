//! Entity resolver: explicit entities plus area/label/domain membership
//! queried from the host through a server-side template.

use crate::core::normalize::CardConfig;
use crate::errors::AppError;
use crate::host::HostApi;
use std::collections::HashSet;

/// Template listing the entities matching the card's targets as JSON, or
/// `None` when no target is configured.
pub fn build_template(area: &str, label: &str, domain: &str) -> Option<String> {
    if area.is_empty() && label.is_empty() && domain.is_empty() {
        return None;
    }

    let mut tpl = String::new();
    if !area.is_empty() {
        tpl.push_str(&format!(
            "{{% set ents = area_entities('{area}') | default([], true) %}}"
        ));
    } else if !label.is_empty() {
        tpl.push_str(&format!(
            "{{% set ents = label_entities('{label}') | default([], true) %}}"
        ));
    } else {
        tpl.push_str(&format!(
            "{{% set ents = states['{domain}'] | map(attribute='entity_id') | list %}}"
        ));
    }

    if !area.is_empty() && !label.is_empty() {
        tpl.push_str(&format!(
            "{{% set ents = ents | select('in', label_entities('{label}')) | list %}}"
        ));
    }
    if (!area.is_empty() || !label.is_empty()) && !domain.is_empty() {
        tpl.push_str(&format!(
            "{{% set ents = ents | select('match', '^{domain}\\\\.') | list %}}"
        ));
    }
    tpl.push_str("{{ ents | tojson }}");

    Some(tpl)
}

/// Explicit entities first, then dynamically matched ones, deduplicated.
/// A failing template call is logged and contributes nothing.
pub fn resolve_entities(host: &dyn HostApi, cfg: &CardConfig) -> Vec<String> {
    let mut resolved: Vec<String> = cfg.entities.iter().map(|e| e.entity_id.clone()).collect();

    if let Some(tpl) = build_template(&cfg.target_area, &cfg.target_label, &cfg.target_domain) {
        match host
            .render_template(&tpl)
            .and_then(|out| serde_json::from_str::<Vec<String>>(out.trim()).map_err(AppError::from))
        {
            Ok(found) => {
                log::debug!("template matched {} entities", found.len());
                resolved.extend(found);
            }
            Err(e) => log::error!("Template resolution failed: {e}"),
        }
    }

    let mut seen = HashSet::new();
    resolved
        .into_iter()
        .filter(|id| !id.trim().is_empty())
        .filter(|id| seen.insert(id.clone()))
        .collect()
}
