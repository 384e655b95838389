// tests/cart_service_tests.rs
mod common;

use common::*;
use storefront::{CartEvent, CartSnapshot, CommandOutcome, ProductId, RejectReason};

fn quantities(snapshot: &CartSnapshot) -> Vec<(u32, u32, u64)> {
  snapshot.lines.iter().map(|l| (l.id.0, l.quantity, l.subtotal)).collect()
}

#[test]
fn test_worked_scenario() {
  setup_tracing();
  let mut service = scenario_service();
  let headphones = ProductId(HEADPHONES);
  let watch = ProductId(WATCH);

  service.add_product(headphones).unwrap();
  service.add_product(headphones).unwrap();
  service.add_product(watch).unwrap();
  assert_eq!(service.set_quantity(headphones, 3).unwrap(), CommandOutcome::Applied);

  let snapshot = service.snapshot();
  assert_eq!(quantities(&snapshot), vec![(HEADPHONES, 3, 38_970), (WATCH, 1, 24_990)]);
  assert_eq!(service.total(), 63_960);
  assert_eq!(service.item_count(), 4);

  assert_eq!(service.remove(watch).unwrap(), CommandOutcome::Applied);
  assert_eq!(service.total(), 38_970);
  assert_eq!(service.item_count(), 3);
}

#[test]
fn test_adding_twice_yields_one_line_of_two() {
  setup_tracing();
  let mut service = scenario_service();
  for id in [HEADPHONES, WATCH, LAPTOP] {
    service.add_product(ProductId(id)).unwrap();
    service.add_product(ProductId(id)).unwrap();
    let line = service.cart().line(ProductId(id)).unwrap();
    assert_eq!(line.quantity, 2);
  }
  assert_eq!(service.cart().len(), 3);
}

#[test]
fn test_total_matches_lines_after_mixed_commands() {
  setup_tracing();
  let mut service = scenario_service();
  let script: &[(&str, u32, i64)] = &[
    ("add", LAPTOP, 0),
    ("add", WATCH, 0),
    ("set", LAPTOP, 4),
    ("add", HEADPHONES, 0),
    ("set", WATCH, 0),
    ("remove", LAPTOP, 0),
    ("add", LAPTOP, 0),
    ("set", HEADPHONES, -1),
    ("set", HEADPHONES, 7),
    ("remove", WATCH, 0),
  ];

  for (op, id, qty) in script {
    let id = ProductId(*id);
    match *op {
      "add" => service.add_product(id).unwrap(),
      "set" => service.set_quantity(id, *qty).unwrap(),
      _ => service.remove(id).unwrap(),
    };
    let expected: u64 = service.cart().lines().iter().map(|l| l.product.price * u64::from(l.quantity)).sum();
    assert_eq!(service.total(), expected);
    assert!(service.cart().lines().iter().all(|l| l.quantity >= 1));
  }

  assert_eq!(quantities(&service.snapshot()), vec![(HEADPHONES, 7, 90_930), (LAPTOP, 1, 89_990)]);
}

#[test]
fn test_quantity_below_one_never_changes_cart() {
  setup_tracing();
  let (mut service, sink) = recorded_service();
  let watch = ProductId(WATCH);
  service.add_product(watch).unwrap();
  service.set_quantity(watch, 2).unwrap();
  let before = service.cart().clone();
  let published = sink.len();

  for requested in [0, -1] {
    let outcome = service.set_quantity(watch, requested).unwrap();
    assert_eq!(outcome, CommandOutcome::Rejected(RejectReason::QuantityBelowOne { requested }));
    assert_eq!(service.cart(), &before);
  }
  assert_eq!(sink.len(), published);
}

#[test]
fn test_remove_then_add_starts_at_one() {
  setup_tracing();
  let mut service = scenario_service();
  let laptop = ProductId(LAPTOP);
  service.add_product(laptop).unwrap();
  service.set_quantity(laptop, 5).unwrap();
  service.remove(laptop).unwrap();
  service.add_product(laptop).unwrap();
  assert_eq!(service.cart().line(laptop).map(|l| l.quantity), Some(1));
}

#[test]
fn test_removing_only_line_empties_cart() {
  setup_tracing();
  let mut service = scenario_service();
  service.add_product(ProductId(WATCH)).unwrap();
  service.remove(ProductId(WATCH)).unwrap();
  assert!(service.cart().is_empty());
  assert_eq!(service.total(), 0);
  assert_eq!(service.item_count(), 0);
  assert!(service.snapshot().is_empty());
}

#[test]
fn test_unknown_ids_are_ignored() {
  setup_tracing();
  let (mut service, sink) = recorded_service();
  let ghost = ProductId(404);
  assert_eq!(service.add_product(ghost).unwrap(), CommandOutcome::Ignored);
  assert_eq!(service.set_quantity(ghost, 3).unwrap(), CommandOutcome::Ignored);
  assert_eq!(service.remove(ghost).unwrap(), CommandOutcome::Ignored);

  // A catalog product that is not in the cart is also ignored by set/remove.
  assert_eq!(service.set_quantity(ProductId(WATCH), 3).unwrap(), CommandOutcome::Ignored);
  assert_eq!(service.remove(ProductId(WATCH)).unwrap(), CommandOutcome::Ignored);

  assert!(service.cart().is_empty());
  assert_eq!(sink.len(), 0);
}

#[test]
fn test_sinks_hear_committed_add_and_remove() {
  setup_tracing();
  let (mut service, sink) = recorded_service();
  let second = RecordingSink::default();
  service.subscribe(second.clone());

  service.add_product(ProductId(HEADPHONES)).unwrap();
  service.set_quantity(ProductId(HEADPHONES), 2).unwrap();
  service.remove(ProductId(HEADPHONES)).unwrap();

  let expected = vec![
    CartEvent::ItemAdded {
      product_id: ProductId(HEADPHONES),
      name: "Headphones".to_string(),
    },
    CartEvent::ItemRemoved {
      product_id: ProductId(HEADPHONES),
    },
  ];
  assert_eq!(sink.events(), expected);
  assert_eq!(second.events(), expected);
}

#[test]
fn test_sinks_run_after_the_pipeline_completes() {
  setup_tracing();
  use std::cell::RefCell;
  use std::rc::Rc;
  use storefront::service::COLLECT_EVENTS;
  use storefront::{CommandCtx, PipelineControl, StorefrontError};

  let log = Rc::new(RefCell::new(Vec::<String>::new()));
  let sink_log = Rc::clone(&log);
  let mut service = scenario_service().with_sink(move |event: &CartEvent| {
    if let CartEvent::ItemAdded { .. } = event {
      sink_log.borrow_mut().push("sink".to_string());
    }
  });
  let hook_log = Rc::clone(&log);
  service
    .pipeline_mut()
    .after_root(COLLECT_EVENTS, move |ctx: &mut CommandCtx| {
      hook_log.borrow_mut().push(format!("last step, total {}", ctx.cart.total()));
      Ok::<_, StorefrontError>(PipelineControl::Continue)
    })
    .unwrap();

  service.add_product(ProductId(WATCH)).unwrap();
  service.add_product(ProductId(WATCH)).unwrap();

  assert_eq!(
    *log.borrow(),
    vec!["last step, total 24990", "sink", "last step, total 49980", "sink"]
  );
  assert_eq!(service.total(), 49_980);
}

#[test]
fn test_add_at_maximum_quantity_is_rejected_without_event() {
  setup_tracing();
  let (mut service, sink) = recorded_service();
  let headphones = ProductId(HEADPHONES);
  service.add_product(headphones).unwrap();
  service.set_quantity(headphones, i64::from(u32::MAX)).unwrap();

  assert_eq!(
    service.add_product(headphones).unwrap(),
    CommandOutcome::Rejected(RejectReason::QuantityTooLarge {
      requested: i64::from(u32::MAX) + 1
    })
  );
  assert_eq!(service.item_count(), u64::from(u32::MAX));
  assert_eq!(sink.len(), 1, "only the first add was published");
}

#[test]
fn test_checkout_reports_totals_without_clearing() {
  setup_tracing();
  let (mut service, sink) = recorded_service();
  assert_eq!(
    service.checkout().unwrap(),
    CommandOutcome::Rejected(RejectReason::EmptyCart)
  );

  service.add_product(ProductId(WATCH)).unwrap();
  service.add_product(ProductId(WATCH)).unwrap();
  assert_eq!(service.checkout().unwrap(), CommandOutcome::Applied);
  assert_eq!(
    sink.events().last(),
    Some(&CartEvent::CheckoutRequested {
      total: 49_980,
      item_count: 2
    })
  );
  assert_eq!(service.item_count(), 2);
}

#[test]
fn test_snapshot_serializes_for_front_end() {
  setup_tracing();
  let mut service = scenario_service();
  service.add_product(ProductId(HEADPHONES)).unwrap();

  let json = serde_json::to_value(service.snapshot()).unwrap();
  assert_eq!(json["total"], 12_990);
  assert_eq!(json["item_count"], 1);
  assert_eq!(json["lines"][0]["id"], HEADPHONES);
  assert_eq!(json["lines"][0]["can_decrement"], false);
}
