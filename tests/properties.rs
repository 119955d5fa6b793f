use sequences::prelude::*;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn ints(values: Vec<Value>) -> Vec<i64> {
    values.iter().filter_map(Value::as_int).collect()
}

fn range(from: i64, to: i64) -> Sequence {
    Sequence::from_values(from..to)
}

#[test]
fn test_to_vec_of_list_is_identity() {
    init_tracing();
    let items = vec![Value::from(3), Value::from("x"), Value::Nil, Value::from(1.5)];
    assert_eq!(normalize(Value::from(items.clone())).to_vec().unwrap(), items);
}

#[test]
fn test_head_length_is_bounded() {
    init_tracing();
    for upstream in 0..5 {
        for n in 0..7 {
            let len = range(0, upstream).head(n as usize).to_vec().unwrap().len();
            assert_eq!(len as i64, n.min(upstream), "head({n}) over {upstream}");
        }
    }
}

#[test]
fn test_skip_head_over_concat_is_a_slice() {
    init_tracing();
    let logical: Vec<i64> = (0..4).chain(10..13).collect();
    let seq = range(0, 4).concat([range(10, 13)]);
    for skip in 0..9 {
        for take in 0..9 {
            let expected: Vec<i64> = logical.iter().copied().skip(skip).take(take).collect();
            let actual = ints(seq.skip(skip).head(take).to_vec().unwrap());
            assert_eq!(actual, expected, "skip({skip}).head({take})");
        }
    }
}

#[test]
fn test_combine_is_as_long_as_shortest() {
    init_tracing();
    let tuples = range(0, 3).combine([range(0, 5)]).to_vec().unwrap();
    assert_eq!(tuples.len(), 3);
    assert_eq!(tuples[2], Value::list([2, 2]));
}

#[test]
fn test_cycle_then_head() {
    init_tracing();
    let out = range(1, 3).cycle(Some(3)).head(5).to_vec().unwrap();
    assert_eq!(ints(out), vec![1, 2, 1, 2, 1]);
}

#[test]
fn test_flatten_unbounded_depth() {
    init_tracing();
    let nested = Value::list([
        Value::from(1),
        Value::list([
            Value::from(2),
            Value::list([Value::from(3), Value::list([4, 5])]),
        ]),
    ]);
    let out = normalize(nested).flatten(None).to_vec().unwrap();
    assert_eq!(ints(out), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_index_of_from_position() {
    init_tracing();
    let seq = Sequence::from_values(["hi", "there", "there"]);
    assert_eq!(seq.index_of("there", Some(1)).unwrap(), 1);
    assert_eq!(seq.index_of("there", Some(2)).unwrap(), 2);
    let seq = Sequence::from_values(["a", "b", "there", "c"]);
    assert_eq!(seq.index_of("there", Some(1)).unwrap(), 2);
}

#[test]
fn test_filter_and_exclude_partition() {
    init_tracing();
    let seq = range(0, 20);
    let pred = |v: &Value| v.as_int().is_some_and(|n| n % 3 == 0);
    let kept = ints(seq.filter(pred).to_vec().unwrap());
    let dropped = ints(seq.exclude(pred).to_vec().unwrap());

    assert_eq!(kept.len() + dropped.len(), 20);
    let mut merged: Vec<i64> = kept.iter().chain(dropped.iter()).copied().collect();
    merged.sort_unstable();
    assert_eq!(merged, (0..20).collect::<Vec<_>>());
    assert!(kept.iter().all(|n| n % 3 == 0));
    assert!(dropped.iter().all(|n| n % 3 != 0));
}

#[test]
fn test_normalize_is_idempotent() {
    init_tracing();
    let seq = normalize(Value::list([1, 2]));
    let again = normalize(seq.clone());
    assert!(again.ptr_eq(&seq));
    assert!(normalize(Value::from(again.clone())).ptr_eq(&seq));
}

#[test]
fn test_invocations_are_independent() {
    init_tracing();
    let seq = numbers(0, 1).map(|v, _| Ok(v.clone())).head(3);
    let mut a = seq.cursor();
    let mut b = seq.cursor();
    assert_eq!(a.advance(Value::Nil).unwrap(), Step::Yielded(Value::from(0)));
    assert_eq!(a.advance(Value::Nil).unwrap(), Step::Yielded(Value::from(1)));
    assert_eq!(b.advance(Value::Nil).unwrap(), Step::Yielded(Value::from(0)));
}

#[test]
fn test_done_is_sticky() {
    init_tracing();
    let mut cursor = range(0, 1).cursor();
    assert!(cursor.advance(Value::Nil).unwrap().is_yielded());
    for _ in 0..3 {
        assert_eq!(cursor.advance(Value::Nil).unwrap(), Step::Complete(Value::Nil));
    }
}

#[test]
fn test_feedback_reaches_producer_through_chain() {
    init_tracing();
    let producer = Sequence::from_producer(|state| {
        Ok(Step::Yielded(Value::from(state.as_int().unwrap_or(0) + 1)))
    });
    let chained = producer
        .map(|v, _| Ok(v.clone()))
        .filter(|_: &Value| true)
        .head(4);
    let mut seen = Vec::new();
    chained
        .for_each(|v| {
            seen.push(v.clone());
            // jump ahead after the first element
            Ok::<_, Error>(if v == Value::from(1) { Value::from(100) } else { Value::Nil })
        })
        .unwrap();
    assert_eq!(ints(seen), vec![1, 101, 102, 103]);
}

#[test]
fn test_one_shot_iterator_second_invocation_is_empty() {
    init_tracing();
    let seq = normalize(Value::iter_once(vec![1, 2, 3]));
    assert_eq!(seq.to_vec().unwrap().len(), 3);
    assert!(seq.to_vec().unwrap().is_empty());
}

#[test]
fn test_callback_error_propagates() {
    init_tracing();
    let seq = range(0, 5).map(|v, _| match v.as_int() {
        Some(3) => Err(Error::callback("three")),
        _ => Ok(v.clone()),
    });
    let err = seq.to_vec().unwrap_err();
    assert_eq!(err.to_string(), "callback failed: three");
}

#[cfg(feature = "json")]
#[test]
fn test_json_documents_normalize() {
    init_tracing();
    let doc: serde_json::Value = serde_json::json!([1, [2, 3], {"k": "v"}]);
    let out = normalize(Value::from(doc)).flatten(None).to_vec().unwrap();
    assert_eq!(out.len(), 4);
    assert_eq!(ints(out[..3].to_vec()), vec![1, 2, 3]);
}
