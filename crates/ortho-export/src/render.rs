use std::collections::BTreeMap;

use ortho_core::ExportMap;
use tera::{Context, Tera};

use crate::error::ExportError;
use crate::placeholders::{Segment, audit_template, segments};

/// Fill a `${key}` template from an export map.
///
/// Refuses to render when any placeholder has no key in `map`; a partially
/// filled document is worse than none. Literal text is passed through
/// untouched, including anything that looks like Tera syntax.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    map: &ExportMap,
) -> Result<String, ExportError> {
    let audit = audit_template(template_content, map);
    if !audit.is_complete() {
        tracing::warn!(
            template = template_name,
            missing = audit.missing.len(),
            "template references unknown export keys"
        );
        return Err(ExportError::MissingPlaceholders(audit.missing));
    }

    let (source, literals) = to_tera_source(template_content);

    let mut tera = Tera::default();
    tera.autoescape_on(vec![]);
    tera.add_raw_template(template_name, &source)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let mut context = Context::new();
    context.insert("fields", map);
    context.insert("literals", &literals);

    let rendered = tera.render(template_name, &context)?;
    tracing::debug!(
        template = template_name,
        placeholders = audit.used.len(),
        "rendered template"
    );
    Ok(rendered)
}

/// Rewrite the template into Tera lookups only: `${key}` reads
/// `fields["key"]`, and the n-th literal run reads `literals["n"]`. No
/// template text ever reaches the Tera parser.
fn to_tera_source(template: &str) -> (String, BTreeMap<String, &str>) {
    let mut source = String::new();
    let mut literals = BTreeMap::new();
    for segment in segments(template) {
        let (table, key) = match segment {
            Segment::Placeholder(name) => ("fields", name.to_string()),
            Segment::Literal(text) => {
                let key = literals.len().to_string();
                literals.insert(key.clone(), text);
                ("literals", key)
            }
        };
        source.push_str("{{ ");
        source.push_str(table);
        source.push_str("[\"");
        source.push_str(&key);
        source.push_str("\"] }}");
    }
    (source, literals)
}
