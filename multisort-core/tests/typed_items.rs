//! Sorting plain Rust structs that expose their fields through `Inspect`.

use multisort_core::{
    Criterion, Inspect, Literal, LookupError, SortError, Value, compile, sort,
};

#[derive(Debug, Clone, PartialEq)]
struct Track {
    title: String,
    artist: String,
    seconds: u32,
    rating: Option<u8>,
    tags: Vec<String>,
}

impl Track {
    fn new(title: &str, artist: &str, seconds: u32, rating: Option<u8>) -> Self {
        Self {
            title: title.to_string(),
            artist: artist.to_string(),
            seconds,
            rating,
            tags: Vec::new(),
        }
    }

    fn tagged(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }
}

impl Inspect for Track {
    fn to_value(&self) -> Value {
        Value::object([
            ("title", Value::from(self.title.as_str())),
            ("artist", Value::from(self.artist.as_str())),
            ("seconds", Value::from(self.seconds)),
            ("rating", Value::from(self.rating)),
            ("tags", Value::from(self.tags.clone())),
        ])
    }

    fn member(&self, name: &str) -> Result<Value, LookupError> {
        Ok(match name {
            "title" => Value::from(self.title.as_str()),
            "artist" => Value::from(self.artist.as_str()),
            "seconds" => Value::from(self.seconds),
            "rating" => Value::from(self.rating),
            "tags" => Value::from(self.tags.clone()),
            _ => Value::Absent,
        })
    }

    fn invoke(&self, name: &str, args: &[Literal]) -> Result<Value, LookupError> {
        match name {
            "minutes" => Ok(Value::from(self.seconds / 60)),
            "hasTag" => {
                let tag = args.first().and_then(Literal::as_str).ok_or_else(|| {
                    LookupError::bad_arguments("hasTag", "expected a tag name")
                })?;
                Ok(Value::from(self.tags.iter().any(|t| t == tag)))
            }
            _ => self.to_value().call(name, args),
        }
    }
}

fn playlist() -> Vec<Track> {
    vec![
        Track::new("Blue", "Joni", 183, Some(5)).tagged(&["folk"]),
        Track::new("Atlas", "Battles", 431, None).tagged(&["math", "rock"]),
        Track::new("alone", "Cure", 302, Some(3)),
        Track::new("Creep", "Radiohead", 238, Some(4)).tagged(&["rock"]),
        Track::new("Blackbird", "Beatles", 138, Some(5)).tagged(&["folk"]),
    ]
}

fn titles(tracks: &[Track]) -> Vec<&str> {
    tracks.iter().map(|t| t.title.as_str()).collect()
}

#[test]
fn member_paths_read_struct_fields() {
    let mut tracks = playlist();
    sort(&mut tracks, "~seconds").expect("sort");
    assert_eq!(
        titles(&tracks),
        vec!["Atlas", "alone", "Creep", "Blue", "Blackbird"]
    );
}

#[test]
fn optional_fields_are_missing_when_none() {
    let mut tracks = playlist();
    sort(&mut tracks, ["~rating", "title"]).expect("sort");
    assert_eq!(
        titles(&tracks),
        vec!["Blackbird", "Blue", "Creep", "alone", "Atlas"]
    );

    let mut tracks = playlist();
    sort(&mut tracks, "rating").expect("sort");
    assert_eq!(titles(&tracks)[0], "Atlas");
}

#[test]
fn custom_methods_take_literal_arguments() {
    let mut tracks = playlist();
    sort(&mut tracks, ["~hasTag(\"rock\")", "title"]).expect("sort");
    assert_eq!(
        titles(&tracks),
        vec!["Atlas", "Creep", "Blackbird", "Blue", "alone"]
    );
}

#[test]
fn builtin_methods_apply_to_field_values() {
    let mut tracks = playlist();
    sort(&mut tracks, "title.toLowerCase()").expect("sort");
    assert_eq!(
        titles(&tracks),
        vec!["alone", "Atlas", "Blackbird", "Blue", "Creep"]
    );
}

#[test]
fn nested_length_and_index_lookups() {
    let mut tracks = playlist();
    sort(&mut tracks, ["~tags.length", "tags.0", "title"]).expect("sort");
    assert_eq!(
        titles(&tracks),
        vec!["Atlas", "Blackbird", "Blue", "Creep", "alone"]
    );
}

#[test]
fn method_errors_abort_and_leave_items_untouched() {
    let mut tracks = playlist();
    let err = sort(&mut tracks, "hasTag()").expect_err("missing tag");
    assert!(matches!(err, SortError::Resolution { .. }));
    assert!(err.to_string().contains("hasTag"));
    assert_eq!(tracks, playlist());
}

#[test]
fn callables_and_paths_mix() {
    let comparator = compile::<Track>(vec![
        Criterion::by(|t: &Track| t.artist.len()),
        Criterion::path("!minutes()"),
    ]);
    let sorted = comparator.sorted(playlist()).expect("sort");
    assert_eq!(
        titles(&sorted),
        vec!["alone", "Blue", "Atlas", "Blackbird", "Creep"]
    );
}
