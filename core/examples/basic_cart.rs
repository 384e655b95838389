// storefront/examples/basic_cart.rs

use storefront::{
  CartCommand, CartEvent, CartService, Catalog, CommandCtx, PipelineControl, ProductId, StorefrontError,
  StorefrontResult, TracingSink,
};
use std::rc::Rc;
use tracing::info;

fn main() -> StorefrontResult<()> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

  info!("--- Basic Cart Example ---");

  // 1. Share the built-in catalog and build a service with a logging sink.
  let catalog = Rc::new(Catalog::builtin());
  let mut service = CartService::new(catalog)?
    .with_sink(TracingSink)
    .with_sink(|event: &CartEvent| info!(?event, "Closure sink saw an event."));

  // 2. Extra behaviour goes in as a hook: refuse more than five of anything.
  service.pipeline_mut().before_root(
    storefront::service::APPLY_TO_CART,
    |ctx: &mut CommandCtx| -> Result<PipelineControl, StorefrontError> {
      if let CartCommand::SetQuantity { quantity, .. } = ctx.command {
        if quantity > 5 {
          info!(quantity, "Limit hook stopping the command.");
          return Ok(PipelineControl::Stop);
        }
      }
      Ok(PipelineControl::Continue)
    },
  )?;

  // 3. Drive it.
  let headphones = ProductId(1);
  let watch = ProductId(2);
  service.add_product(headphones)?;
  service.add_product(headphones)?;
  service.add_product(watch)?;
  info!(outcome = ?service.set_quantity(headphones, 3)?, "Set headphones to 3.");
  info!(outcome = ?service.set_quantity(headphones, 0)?, "Set headphones to 0.");
  info!(outcome = ?service.set_quantity(headphones, 9)?, "Set headphones to 9.");
  service.remove(watch)?;

  let snapshot = service.snapshot();
  info!(
    lines = snapshot.lines.len(),
    items = snapshot.item_count,
    total = %snapshot.total_display(),
    "Final cart."
  );
  assert_eq!(snapshot.total, 38_970);

  info!(outcome = ?service.checkout()?, "Checkout.");
  Ok(())
}
