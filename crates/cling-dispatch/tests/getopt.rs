use cling_dispatch::getopt::{find, occurrences, raw_args};
use cling_dispatch::{OptionSpec, Options, Route, RouteKind};
use proptest::prelude::*;

#[test]
fn test_route_dispatch_from_scan() {
    let mut seen = None;
    {
        let mut route = Route::builder(RouteKind::option("hello-world:", None).unwrap())
            .handler_fn(|ctx| {
                assert_eq!(ctx.value(), Some("World"));
                Ok(())
            })
            .build()
            .unwrap();
        let raw = raw_args(["app", "--hello-world", "World"]);
        let spec = route.option_spec().cloned().unwrap();
        if let Some(found) = find(&spec, &raw) {
            seen = Some(found.key().to_string());
            route
                .dispatch(found.value(), &mut Options::default(), "")
                .unwrap();
        }
    }
    assert_eq!(seen.as_deref(), Some("hello-world"));
}

#[test]
fn test_non_utf8_value_is_lossy() {
    #[cfg(unix)]
    {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let spec = OptionSpec::new("name:", None).unwrap();
        let raw = raw_args([
            OsString::from("app"),
            OsString::from("--name"),
            OsString::from_vec(vec![b'a', 0xff, b'b']),
        ]);
        assert_eq!(find(&spec, &raw).unwrap().value(), Some("a\u{fffd}b"));
    }
}

proptest! {
    #[test]
    fn value_round_trips_through_every_spelling(
        value in "[A-Za-z0-9./_]{1,12}",
        spelling in 0usize..4,
    ) {
        let spec = OptionSpec::new("name:", Some("n")).unwrap();
        let args: Vec<String> = match spelling {
            0 => vec!["app".into(), format!("--name={value}")],
            1 => vec!["app".into(), "--name".into(), value.clone()],
            2 => vec!["app".into(), format!("-n{value}")],
            _ => vec!["app".into(), "-n".into(), value.clone()],
        };

        let found = find(&spec, &raw_args(args));
        prop_assert_eq!(found.and_then(|m| m.into_value()), Some(value));
    }

    #[test]
    fn occurrences_count_repeats(repeats in 0usize..6) {
        let spec = OptionSpec::new("verbose", Some("v")).unwrap();
        let mut args = vec!["app".to_string()];
        args.extend(std::iter::repeat("-v".to_string()).take(repeats));

        prop_assert_eq!(occurrences(&spec, &raw_args(args)).len(), repeats);
    }

    #[test]
    fn nothing_after_escape_matches(tail in prop::collection::vec("-[a-z]", 0..5)) {
        let spec = OptionSpec::new("verbose", Some("v")).unwrap();
        let mut args = vec!["app".to_string(), "--".to_string()];
        args.extend(tail);

        prop_assert!(find(&spec, &raw_args(args)).is_none());
    }
}
