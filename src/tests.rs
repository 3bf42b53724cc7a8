#[cfg(test)]
use crate::*;

#[cfg(test)]
use std::collections::BTreeSet;

#[cfg(test)]
fn tags(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
fn spans(annotations: &[SpanAnnotation]) -> Vec<(&str, usize, usize)> {
    annotations
        .iter()
        .map(|a| (a.tag(), a.begin(), a.end()))
        .collect()
}

#[test]
fn extract_tail_text() -> Result<(), TempEvalError> {
    let annotations = extract("<p>A<b>X</b>B</p>", 0, &tags(&["b"]))?;
    assert_eq!(spans(&annotations), vec![("b", 1, 2)]);
    Ok(())
}

#[test]
fn extract_nested() -> Result<(), TempEvalError> {
    let annotations = extract("<p>A<b>X</b>B</p>", 0, &tags(&["p", "b"]))?;
    assert_eq!(spans(&annotations), vec![("p", 0, 3), ("b", 1, 2)]);
    Ok(())
}

#[test]
fn extract_deeply_nested_order() -> Result<(), TempEvalError> {
    let annotations = extract(
        "<x><a>1<b>2<c>3</c></b></a><c>4</c></x>",
        0,
        &tags(&["a", "b", "c"]),
    )?;
    assert_eq!(
        spans(&annotations),
        vec![("a", 0, 3), ("b", 1, 3), ("c", 2, 3), ("c", 3, 4)]
    );
    Ok(())
}

#[test]
fn extract_uninteresting_elements_still_count() -> Result<(), TempEvalError> {
    let annotations = extract(
        "<x>one <i>two</i> three <b>four</b></x>",
        0,
        &tags(&["b"]),
    )?;
    assert_eq!(spans(&annotations), vec![("b", 14, 18)]);
    Ok(())
}

#[test]
fn extract_zero_width() -> Result<(), TempEvalError> {
    let markup = r#"<TEXT>Before <SIGNAL sid="s1"/>after <EVENT eid="e1">this</EVENT></TEXT>"#;
    let annotations = extract(markup, 0, &tags(&["SIGNAL", "EVENT"]))?;
    assert_eq!(spans(&annotations), vec![("SIGNAL", 7, 7), ("EVENT", 13, 17)]);
    assert_eq!(annotations[0].attribute("sid"), Some("s1"));
    Ok(())
}

#[test]
fn extract_empty_pair() -> Result<(), TempEvalError> {
    let annotations = extract("<x>a<b></b>c<b>d</b></x>", 0, &tags(&["b"]))?;
    assert_eq!(spans(&annotations), vec![("b", 1, 1), ("b", 2, 3)]);
    Ok(())
}

#[test]
fn extract_start_offset() -> Result<(), TempEvalError> {
    let annotations = extract("<x>ab<b>c</b></x>", 10, &tags(&["b"]))?;
    assert_eq!(spans(&annotations), vec![("b", 12, 13)]);
    Ok(())
}

#[test]
fn extract_ignores_comments() -> Result<(), TempEvalError> {
    let annotations = extract("<x>a<!-- comment -->b<b>c</b>d</x>", 0, &tags(&["b"]))?;
    assert_eq!(spans(&annotations), vec![("b", 2, 3)]);
    Ok(())
}

#[test]
fn extract_entities_count_as_one_character() -> Result<(), TempEvalError> {
    let annotations = extract("<x>&amp;<b>&lt;&gt;</b></x>", 0, &tags(&["b"]))?;
    assert_eq!(spans(&annotations), vec![("b", 1, 3)]);
    Ok(())
}

#[test]
fn extract_unicode_codepoints() -> Result<(), TempEvalError> {
    let annotations = extract("<x>café <b>naïve</b></x>", 0, &tags(&["b"]))?;
    assert_eq!(spans(&annotations), vec![("b", 5, 10)]);
    Ok(())
}

#[test]
fn extract_root_of_interest() -> Result<(), TempEvalError> {
    let annotations = extract("<b>whole</b>", 0, &tags(&["b"]))?;
    assert_eq!(spans(&annotations), vec![("b", 0, 5)]);
    Ok(())
}

#[test]
fn extract_malformed() {
    assert!(matches!(
        extract("<x><b></x>", 0, &tags(&["b"])),
        Err(TempEvalError::MalformedInputError(..))
    ));
}

#[test]
fn extract_spans_select_element_text() -> Result<(), TempEvalError> {
    let markup = "<TEXT>\n  The <EVENT>war</EVENT> ended <TIMEX3>in <SIGNAL>late</SIGNAL> 1945</TIMEX3>, <EVENT>said</EVENT> the war  <EVENT>historian</EVENT>.\n</TEXT>";
    let doc = roxmltree::Document::parse(markup).expect("must parse");
    let plaintext = markup::to_text(doc.root_element());
    let annotations = extract(markup, 0, &tags(&["EVENT", "TIMEX3", "SIGNAL"]))?;
    let texts: Vec<&str> = annotations
        .iter()
        .map(|a| plaintext.text_by_span(&a.span()))
        .collect::<Result<_, _>>()?;
    assert_eq!(texts, vec!["war", "in late 1945", "late", "said", "historian"]);
    Ok(())
}

#[test]
fn direct_and_tail_text() {
    let doc = roxmltree::Document::parse("<x>a<!--c-->b<y>c</y>d<?pi?>e<z/>f</x>").expect("must parse");
    let root = doc.root_element();
    assert_eq!(markup::direct_text(root), "ab");
    let y = root
        .children()
        .find(|n| n.has_tag_name("y"))
        .expect("y must exist");
    assert_eq!(markup::direct_text(y), "c");
    assert_eq!(markup::tail_text(y), "de");
    let z = root
        .children()
        .find(|n| n.has_tag_name("z"))
        .expect("z must exist");
    assert_eq!(markup::direct_text(z), "");
    assert_eq!(markup::tail_text(z), "f");
}

#[test]
fn markup_roundtrip() -> Result<(), TempEvalError> {
    let xml = "<TimeML><TEXT>\r\n A &amp; B <EVENT eid=\"e&quot;1\" note=\"a&#10;b\">&lt;tag&gt;</EVENT><!-- skip --> tail <SIGNAL/>end\n</TEXT></TimeML>";
    let doc = roxmltree::Document::parse(xml).expect("must parse");
    let text_node = doc
        .descendants()
        .find(|n| n.has_tag_name("TEXT"))
        .expect("TEXT must exist");
    let plaintext = markup::to_text(text_node);
    let serialized = markup::to_markup(text_node);
    assert_eq!(plaintext, "\n A & B <tag> tail end\n");
    assert_eq!(markup::strip_tags(&serialized)?, plaintext);
    assert!(serialized.starts_with("<TEXT>"));
    assert!(serialized.contains("<SIGNAL/>"));
    assert!(!serialized.contains("skip"));

    //attributes survive a second pass
    let annotations = extract(&serialized, 0, &tags(&["EVENT"]))?;
    assert_eq!(annotations[0].attribute("eid"), Some("e\"1"));
    assert_eq!(annotations[0].attribute("note"), Some("a\nb"));
    Ok(())
}

#[test]
fn markup_roundtrip_namespaced_attributes() -> Result<(), TempEvalError> {
    let xml = r#"<d xmlns:a="urn:a" xmlns:b="urn:b"><TEXT>x <EVENT a:id="1" b:id="2" id="3" xml:lang="en">y</EVENT></TEXT></d>"#;
    let doc = roxmltree::Document::parse(xml).expect("must parse");
    let text_node = doc
        .descendants()
        .find(|n| n.has_tag_name("TEXT"))
        .expect("TEXT must exist");
    let serialized = markup::to_markup(text_node);
    assert_eq!(markup::strip_tags(&serialized)?, "x y");

    let annotations = extract(&serialized, 0, &tags(&["EVENT"]))?;
    assert_eq!(spans(&annotations), vec![("EVENT", 2, 3)]);
    assert_eq!(annotations[0].attributes().len(), 4);
    assert_eq!(annotations[0].attribute("a:id"), Some("1"));
    assert_eq!(annotations[0].attribute("b:id"), Some("2"));
    assert_eq!(annotations[0].attribute("id"), Some("3"));
    assert_eq!(annotations[0].attribute("xml:lang"), Some("en"));

    //and through the reader, which renders the text region before extracting from it
    let xml = r#"<d xmlns:a="urn:a" xmlns:b="urn:b"><DCT><TIMEX3 functionInDocument="CREATION_TIME" value="2001-01-01"/></DCT><TEXT>x <EVENT a:id="1" b:id="2">y</EVENT></TEXT></d>"#;
    let document = TempEval3Reader::default().parse_str("example", xml)?;
    assert_eq!(spans(document.annotations()), vec![("EVENT", 2, 3)]);
    assert_eq!(document.annotations()[0].attribute("b:id"), Some("2"));
    Ok(())
}

#[test]
fn span_basics() {
    let span = Span::new(3, 7);
    assert_eq!(span.len(), 4);
    assert!(!span.is_empty());
    assert!(span.embeds(&Span::new(4, 7)));
    assert!(!span.embeds(&Span::new(2, 4)));
    assert_eq!(span.shift_left(5), Span::new(0, 2));
    assert_eq!(Span::new(5, 2), Span::new(5, 5));
    assert_eq!(Span::from((1, 2)), Span::new(1, 2));
    assert_eq!(format!("{}", span), "[3, 7)");
}

#[test]
fn span_from_json() {
    let span: Span = serde_json::from_str(r#"{"begin":3,"end":7}"#).expect("valid span");
    assert_eq!(span, Span::new(3, 7));
    let empty: Span = serde_json::from_str(r#"{"begin":3,"end":3}"#).expect("zero-width span");
    assert!(empty.is_empty());
    assert!(serde_json::from_str::<Span>(r#"{"begin":5,"end":2}"#).is_err());
}

#[test]
fn text_conversions() -> Result<(), TempEvalError> {
    let text = "a€b";
    assert_eq!(text.textlen(), 3);
    assert_eq!(text.utf8byte(1)?, 1);
    assert_eq!(text.utf8byte(2)?, 4);
    assert_eq!(text.utf8byte(3)?, 5);
    assert!(text.utf8byte(4).is_err());
    assert_eq!(text.utf8byte_to_charpos(4)?, 2);
    assert!(matches!(
        text.utf8byte_to_charpos(2),
        Err(TempEvalError::InvalidUtf8ByteIndex(2, _))
    ));
    assert_eq!(text.text_by_span(&Span::new(1, 3))?, "€b");
    assert!(matches!(
        text.text_by_span(&Span::new(1, 4)),
        Err(TempEvalError::SpanOutOfBounds(..))
    ));
    Ok(())
}

#[test]
fn error_message() {
    let err = TempEvalError::AmbiguousReferenceTimeError(2, "test");
    assert_eq!(
        format!("{}", err),
        "[TempEvalError] AmbiguousReferenceTimeError: Found 2 document creation times, expected exactly one (test)"
    );
}

#[test]
fn whitespace_analyzer() -> Result<(), TempEvalError> {
    let analysis = WhitespaceAnalyzer::new().analyze("  \n déjà vu, again")?;
    let tokens = analysis.as_json()["tokens"]
        .as_array()
        .expect("tokens must be an array")
        .clone();
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0]["text"], "déjà");
    assert_eq!(tokens[1]["begin"], 5);
    assert_eq!(tokens[1]["end"], 8);
    assert_eq!(tokens[2]["begin"], 9);
    Ok(())
}

#[test]
fn config_defaults() {
    let config = Config::default();
    assert_eq!(config.text_tag(), "TEXT");
    assert_eq!(config.tags(), &tags(&["TIMEX3", "EVENT", "SIGNAL"]));
    assert_eq!(config.reference_time_tag(), "TIMEX3");
    assert_eq!(
        config.reference_time_attribute(),
        ("functionInDocument", "CREATION_TIME")
    );
    assert_eq!(config.reference_time_value_attribute(), "value");
    assert_eq!(config.reference_time_policy(), ReferenceTimePolicy::First);
    assert_eq!(config.offset_base(), OffsetBase::PlainText);
    assert_eq!(ReferenceTimePolicy::default(), ReferenceTimePolicy::First);
    assert_eq!(OffsetBase::default(), OffsetBase::PlainText);
    assert!(!config.debug());
}

#[test]
fn config_json_roundtrip() -> Result<(), TempEvalError> {
    let config = Config::default()
        .with_tag("ALINK")
        .with_reference_time("DATE", "type", "DCT", "when");
    let json = config.to_json_string(true)?;
    let config2: Config = serde_json::from_str(&json).expect("must deserialize");
    assert_eq!(config, config2);
    assert!(config2.tags().contains("ALINK"));
    assert_eq!(config2.reference_time_attribute(), ("type", "DCT"));
    Ok(())
}

#[test]
fn custom_reference_time() -> Result<(), TempEvalError> {
    let xml = r#"<doc><DATE type="DCT" when="2020-02-02"/><TEXT>x <EVENT>y</EVENT></TEXT></doc>"#;
    let reader =
        TempEval3Reader::new(Config::default().with_reference_time("DATE", "type", "DCT", "when"));
    let document = reader.parse_str("custom", xml)?;
    assert_eq!(document.dct(), "2020-02-02");
    Ok(())
}

#[test]
fn dct_datetime_invalid() -> Result<(), TempEvalError> {
    let xml = r#"<doc><TIMEX3 functionInDocument="CREATION_TIME" value="PRESENT_REF"/><TEXT>x</TEXT></doc>"#;
    let document = TempEval3Reader::default().parse_str("invalid", xml)?;
    assert_eq!(document.dct(), "PRESENT_REF");
    assert!(matches!(
        document.dct_datetime(),
        Err(TempEvalError::DateTimeError(..))
    ));
    Ok(())
}

#[cfg(feature = "textvalidation")]
#[test]
fn validation_detects_changed_text() -> Result<(), TempEvalError> {
    let xml = r#"<doc><TIMEX3 functionInDocument="CREATION_TIME" value="2001-01-01"/><TEXT>They <EVENT>approved</EVENT> it<SIGNAL/>.</TEXT></doc>"#;
    let mut document = TempEval3Reader::default().parse_str("validation", xml)?;
    document.validate_text(false)?;
    assert_eq!(document.annotations()[1].checksum(), None);

    document.text = document.text.replace("approved", "accepted");
    assert!(!document.validate_annotation(&document.annotations()[0]));
    assert!(document.validate_annotation(&document.annotations()[1]));
    assert!(matches!(
        document.validate_text(false),
        Err(TempEvalError::ValidationError(..))
    ));
    Ok(())
}
