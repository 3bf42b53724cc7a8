#![allow(dead_code)]
use std::collections::BTreeSet;
use tempeval::*;

pub const CARGO_MANIFEST_DIR: &'static str = env!("CARGO_MANIFEST_DIR");

pub fn datafile(name: &str) -> String {
    format!("{}/tests/data/{}", CARGO_MANIFEST_DIR, name)
}

/// A document whose body starts with leading whitespace, with a nested and an empty element of interest
pub const EXAMPLE_WHITESPACE: &str = r#"<TimeML>
<DCT><TIMEX3 tid="t0" type="DATE" value="2013-03-22T10:15" functionInDocument="CREATION_TIME">March 22, 2013</TIMEX3></DCT>
<TEXT>

  Hello <TIMEX3 tid="t1" type="DATE" value="2013-03-22">today</TIMEX3> we <EVENT eid="e1" class="OCCURRENCE">met</EVENT><SIGNAL sid="s1"/> again.</TEXT>
</TimeML>"#;

pub const EXAMPLE_NO_DCT: &str = r#"<TimeML>
<TEXT>Nothing <EVENT eid="e1">happened</EVENT>.</TEXT>
</TimeML>"#;

pub const EXAMPLE_DCT_WITHOUT_VALUE: &str = r#"<TimeML>
<DCT><TIMEX3 tid="t0" type="DATE" functionInDocument="CREATION_TIME">today</TIMEX3></DCT>
<TEXT>Nothing <EVENT eid="e1">happened</EVENT>.</TEXT>
</TimeML>"#;

pub const EXAMPLE_NO_TEXT: &str = r#"<TimeML>
<DCT><TIMEX3 tid="t0" type="DATE" value="2013-03-22" functionInDocument="CREATION_TIME">March 22, 2013</TIMEX3></DCT>
<BODY>Nothing <EVENT eid="e1">happened</EVENT>.</BODY>
</TimeML>"#;

pub const EXAMPLE_MALFORMED: &str = r#"<TimeML>
<DCT><TIMEX3 tid="t0" value="2013-03-22" functionInDocument="CREATION_TIME">March 22, 2013</TIMEX3></DCT>
<TEXT>Nothing <EVENT eid="e1">happened.</TEXT>
</TimeML>"#;

pub fn tags(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

pub fn spans(annotations: &[SpanAnnotation]) -> Vec<(&str, usize, usize)> {
    annotations
        .iter()
        .map(|a| (a.tag(), a.begin(), a.end()))
        .collect()
}
