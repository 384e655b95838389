// demos/storefront_app/src/terminal/render.rs

//! Plain-text rendering of the storefront pages and the cart drawer.

use storefront::content::{InfoCard, DELIVERY_OPTIONS, FAQ, FEATURES, PAYMENT_METHODS};
use storefront::{format_price, CartSnapshot, CartView, Notification, Page, Product, ProductView, Session};

const RULE: &str = "────────────────────────────────────────";

/// Accumulates rendered text; implements the core view traits.
#[derive(Debug, Default)]
pub struct TextScreen {
  out: String,
}

impl TextScreen {
  pub fn new() -> Self {
    Self::default()
  }

  fn line(&mut self, text: impl AsRef<str>) {
    self.out.push_str(text.as_ref());
    self.out.push('\n');
  }

  pub fn into_string(self) -> String {
    self.out
  }
}

impl ProductView for TextScreen {
  fn render_product(&mut self, product: &Product) {
    self.line(format!("[{}] {}  {}", product.id, product.name, format_price(product.price)));
    self.line(format!("    {}", product.description));
    self.line(format!("    {}", product.image));
    self.line(format!("    > add {}   (В корзину)", product.id));
  }
}

impl CartView for TextScreen {
  fn render_cart(&mut self, snapshot: &CartSnapshot) {
    self.line(RULE);
    self.line("Корзина");
    if snapshot.is_empty() {
      self.line("  Корзина пуста");
      self.line("  Добавьте товары для оформления заказа");
      self.line(RULE);
      return;
    }
    for line in &snapshot.lines {
      let minus = if line.can_decrement { "[-]" } else { "[ ]" };
      self.line(format!("  {} — {}", line.name, line.unit_price_display()));
      self.line(format!("    {} {} [+]   rm {}", minus, line.quantity, line.id));
    }
    self.line(format!("  Итого: {}", snapshot.total_display()));
    self.line("  > checkout   (Оформить заказ)");
    self.line(RULE);
  }
}

fn render_cards(screen: &mut TextScreen, heading: &str, cards: &[InfoCard]) {
  screen.line(heading);
  for card in cards {
    screen.line(format!("  • {}", card.title));
    screen.line(format!("    {}", card.description));
    if !card.details.is_empty() {
      screen.line(format!("    {}", card.details));
    }
  }
}

fn render_navbar(screen: &mut TextScreen, session: &Session) {
  let marker = |page: Page| if session.page() == page { "*" } else { " " };
  screen.line(format!(
    "ShopMinimal  {}catalog {}delivery   🛒 {}",
    marker(Page::Catalog),
    marker(Page::Delivery),
    session.badge_count()
  ));
  screen.line(RULE);
}

fn render_catalog(screen: &mut TextScreen, session: &Session) {
  screen.line("Популярные товары");
  for product in session.cart().catalog().products() {
    screen.render_product(product);
  }
  screen.line("");
  render_cards(screen, "Почему выбирают нас", FEATURES);
}

fn render_delivery(screen: &mut TextScreen, session: &Session) {
  screen.line("Доставка и оплата");
  render_cards(screen, "Способы доставки", DELIVERY_OPTIONS);
  render_cards(screen, "Способы оплаты", PAYMENT_METHODS);
  screen.line("Частые вопросы");
  for (idx, entry) in FAQ.iter().enumerate() {
    let open = session.faq().is_open(idx);
    screen.line(format!("  {} {}. {}", if open { "▾" } else { "▸" }, idx + 1, entry.question));
    if open {
      screen.line(format!("      {}", entry.answer));
    }
  }
}

/// Full screen for the session's current state.
pub fn render_session(session: &Session) -> String {
  let mut screen = TextScreen::new();
  render_navbar(&mut screen, session);
  match session.page() {
    Page::Catalog => render_catalog(&mut screen, session),
    Page::Delivery => render_delivery(&mut screen, session),
  }
  if session.is_cart_open() {
    screen.render_cart(&session.cart().snapshot());
  }
  screen.into_string()
}

pub fn render_toast(toast: &Notification) -> String {
  format!("🔔 {} — {} ({} ms)", toast.title, toast.description, toast.duration.as_millis())
}
