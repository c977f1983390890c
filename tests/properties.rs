use proptest::prelude::*;
use tresult::prelude::*;
use tresult::{failure, success, Error, Errors, MapErrorChainPolicy, OneOf};

type Outcome<T> = tresult::Result<T>;

fn errors_of(messages: &[String]) -> Errors {
    let mut errors = Errors::from(messages[0].as_str());
    for m in &messages[1..] {
        errors.push(Error::new(m.as_str()));
    }
    errors
}

fn messages<T>(r: &Outcome<T>) -> Vec<String> {
    r.errors()
        .map(|es| es.messages().map(str::to_owned).collect())
        .unwrap_or_default()
}

fn operand(value: u8, error: Option<String>) -> Outcome<u8> {
    match error {
        Some(e) => failure(e),
        None => success(value),
    }
}

fn message_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,8}", 1..6)
}

proptest! {
    #[test]
    fn one_of_slots_hold_what_was_put_in(n in any::<u32>(), s in ".{0,16}", b in any::<bool>()) {
        type Three = OneOf![u32, String, bool];

        let v = Three::from_first(n);
        prop_assert_eq!(v.tag(), 0);
        prop_assert_eq!(v.first(), Some(&n));
        prop_assert!(v.second().is_none() && v.third().is_none());

        let v = Three::from_second(s.clone());
        prop_assert_eq!(v.tag(), 1);
        prop_assert_eq!(v.second(), Some(&s));
        prop_assert!(v.first().is_none() && v.third().is_none());

        let v = Three::from_third(b);
        prop_assert_eq!(v.tag(), 2);
        prop_assert_eq!(v.clone().into_third().ok(), Some(b));
        prop_assert_eq!(v.match_with(|_| 0, |_| 1, |_| 2), 2);
    }

    #[test]
    fn try_get_round_trips_every_arity(
        a in any::<u8>(),
        b in any::<i16>(),
        c in any::<u32>(),
        d in any::<i64>(),
        e in any::<char>(),
        f in "[a-z]{0,4}",
        g in any::<bool>(),
        h in any::<u128>(),
    ) {
        let r = success(a);
        prop_assert_eq!(r.try_get(), Some(&a));
        let two = (a, b);
        let r = success(two);
        prop_assert_eq!(r.try_get(), Some(&two));
        let three = (a, b, c);
        let r = success(three);
        prop_assert_eq!(r.try_get(), Some(&three));
        let four = (a, b, c, d);
        let r = success(four);
        prop_assert_eq!(r.try_get(), Some(&four));
        let five = (a, b, c, d, e);
        let r = success(five);
        prop_assert_eq!(r.try_get(), Some(&five));
        let six = (a, b, c, d, e, f.clone());
        let r = success(six.clone());
        prop_assert_eq!(r.try_get(), Some(&six));
        let seven = (a, b, c, d, e, f.clone(), g);
        let r = success(seven.clone());
        prop_assert_eq!(r.try_get(), Some(&seven));
        let eight = (a, b, c, d, e, f, g, h);
        let r = success(eight.clone());
        prop_assert_eq!(r.try_get(), Some(&eight));
    }

    #[test]
    fn zip_returns_first_failure_or_all_values(
        values in any::<(u8, u8, u8)>(),
        errors in (
            proptest::option::of("[a-z]{1,6}"),
            proptest::option::of("[a-z]{1,6}"),
            proptest::option::of("[a-z]{1,6}"),
        ),
    ) {
        let first_error = errors.0.clone().or(errors.1.clone()).or(errors.2.clone());
        let zipped = (
            operand(values.0, errors.0),
            operand(values.1, errors.1),
            operand(values.2, errors.2),
        )
            .zip();
        match first_error {
            Some(e) => {
                prop_assert_eq!(messages(&zipped), vec![e]);
            }
            None => {
                prop_assert_eq!(zipped.ok(), Some(values));
            }
        }
    }

    #[test]
    fn map_error_counts_follow_policy(list in message_list()) {
        let n = list.len();
        let failed: Outcome<()> = Err(errors_of(&list));
        let map = |e: &tresult::ErrorRef| Error::new(format!("{}!", e.message()));

        let replaced = failed.clone().map_error(map, MapErrorChainPolicy::ShortCircuit);
        let mapped: Vec<String> = list.iter().map(|m| format!("{m}!")).collect();
        prop_assert_eq!(messages(&replaced), mapped.clone());

        let accumulated = failed.map_error(map, MapErrorChainPolicy::Accumulate);
        let all = messages(&accumulated);
        prop_assert_eq!(all.len(), 2 * n);
        prop_assert_eq!(&all[..n], &list[..]);
        prop_assert_eq!(&all[n..], &mapped[..]);
    }

    #[test]
    fn failures_pass_through_success_combinators(list in message_list()) {
        let failed: Outcome<u8> = Err(errors_of(&list));
        prop_assert_eq!(messages(&failed.clone().map(|v| v + 1)), list.clone());
        prop_assert_eq!(messages(&failed.clone().bind(|v| success(v))), list.clone());
        prop_assert_eq!(messages(&failed.clone().ensure(|_| false, |_| "never")), list.clone());
        prop_assert_eq!(messages(&failed.tap(|_| panic!("not called"))), list);
    }

    #[test]
    fn context_never_changes_the_error_count(list in message_list(), ctx in "[A-Z]{1,5}") {
        let failed: Outcome<()> = Err(errors_of(&list));
        let n = list.len();

        let appended = messages(&failed.clone().append_error(&ctx));
        prop_assert_eq!(appended.len(), n);
        prop_assert_eq!(&appended[n - 1], &format!("{ctx}: {}", list[n - 1]));
        prop_assert_eq!(&appended[..n - 1], &list[..n - 1]);

        let prepended = messages(&failed.prepend_error(&ctx));
        prop_assert_eq!(prepended.len(), n);
        prop_assert_eq!(&prepended[0], &format!("{ctx}: {}", list[0]));
        prop_assert_eq!(&prepended[1..], &list[1..]);
    }

    #[test]
    fn filter_error_never_empties_a_failure(list in message_list(), keep in "[a-z]") {
        let failed: Outcome<()> = Err(errors_of(&list));
        let expected: Vec<String> = list.iter().filter(|m| m.contains(keep.as_str())).cloned().collect();
        let filtered = messages(&failed.filter_error(|e| e.message().contains(keep.as_str())));
        if expected.is_empty() {
            prop_assert_eq!(filtered, list);
        } else {
            prop_assert_eq!(filtered, expected);
        }
    }

    #[test]
    fn recover_only_touches_failures(v in any::<i32>(), list in message_list()) {
        prop_assert_eq!(success(v).recover(|_| v.wrapping_add(1)).ok(), Some(v));
        let failed: Outcome<i32> = Err(errors_of(&list));
        prop_assert_eq!(failed.recover(|es| es.len() as i32).ok(), Some(list.len() as i32));
    }
}
