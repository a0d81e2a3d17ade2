use ortho_core::ExportMap;
use ortho_export::error::ExportError;
use ortho_export::render::render_template;

fn map(pairs: &[(&str, &str)]) -> ExportMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn substitutes_every_placeholder() {
    let values = map(&[
        ("clientName", "Jansen"),
        ("multivormLeft", "Ja"),
        ("multivormLeftMm", "3"),
    ]);
    let rendered = render_template(
        "werkbon",
        "Cliënt: ${clientName}\nMultivorm links: ${multivormLeft} (${multivormLeftMm} mm)\n",
        &values,
    )
    .unwrap();

    assert_eq!(
        rendered,
        "Cliënt: Jansen\nMultivorm links: Ja (3 mm)\n"
    );
}

#[test]
fn empty_values_render_as_nothing() {
    let values = map(&[("leatherLeft", "")]);
    let rendered = render_template("t", "[${leatherLeft}]", &values).unwrap();
    assert_eq!(rendered, "[]");
}

#[test]
fn template_syntax_in_literal_text_is_not_interpreted() {
    let values = map(&[("clientName", "Jansen")]);
    let template = "{{ clientName }} {% if x %} {# note #} ${clientName} ${ broken } $${clientName}";
    let rendered = render_template("t", template, &values).unwrap();
    assert_eq!(
        rendered,
        "{{ clientName }} {% if x %} {# note #} Jansen ${ broken } $Jansen"
    );
}

#[test]
fn literal_raw_block_markers_are_kept_verbatim() {
    let values = map(&[("clientName", "Jansen")]);
    let rendered = render_template(
        "t",
        "Naam: ${clientName} {% endraw %}{{ 1 + 1 }} einde",
        &values,
    )
    .unwrap();
    assert_eq!(rendered, "Naam: Jansen {% endraw %}{{ 1 + 1 }} einde");
}

#[test]
fn template_without_placeholders_renders_unchanged() {
    let rendered = render_template("t", "{% raw %}geen velden", &ExportMap::new()).unwrap();
    assert_eq!(rendered, "{% raw %}geen velden");
    assert_eq!(render_template("t", "", &ExportMap::new()).unwrap(), "");
}

#[test]
fn markup_in_values_is_not_escaped() {
    let values = map(&[("specialNotes", "<drukplek> & eelt")]);
    let rendered = render_template("brief.html", "${specialNotes}", &values).unwrap();
    assert_eq!(rendered, "<drukplek> & eelt");
}

#[test]
fn missing_keys_refuse_to_render() {
    let values = map(&[("clientName", "Jansen")]);
    let err = render_template("t", "${clientName} ${shoeSize} ${price}", &values).unwrap_err();

    match err {
        ExportError::MissingPlaceholders(missing) => {
            assert_eq!(missing, vec!["shoeSize", "price"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}
