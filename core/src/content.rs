// storefront/src/content.rs

//! Static page content: delivery options, payment methods, the "why us"
//! features and the FAQ, plus the single-open accordion that displays the FAQ.

use serde::Serialize;

/// An icon + title + text card as shown on the delivery page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InfoCard {
  pub icon: &'static str,
  pub title: &'static str,
  pub description: &'static str,
  pub details: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
  pub question: &'static str,
  pub answer: &'static str,
}

pub const DELIVERY_OPTIONS: &[InfoCard] = &[
  InfoCard {
    icon: "Truck",
    title: "Курьерская доставка",
    description: "По Москве — от 300 ₽, бесплатно при заказе от 5000 ₽",
    details: "Доставка осуществляется в течение 1-2 рабочих дней. Курьер свяжется с вами за час до приезда.",
  },
  InfoCard {
    icon: "Package",
    title: "Пункт выдачи",
    description: "Бесплатно в любой пункт выдачи",
    details: "Более 5000 пунктов выдачи по всей России. Срок доставки 2-5 рабочих дней.",
  },
  InfoCard {
    icon: "MapPin",
    title: "Самовывоз",
    description: "Бесплатно из наших магазинов",
    details: "Забрать заказ можно в день оформления. Адреса магазинов: ул. Тверская, 1; пр-т Мира, 50.",
  },
];

pub const PAYMENT_METHODS: &[InfoCard] = &[
  InfoCard {
    icon: "CreditCard",
    title: "Банковская карта",
    description: "Visa, MasterCard, МИР",
    details: "Безопасная оплата через защищенное соединение. Данные карты не сохраняются.",
  },
  InfoCard {
    icon: "Smartphone",
    title: "Электронные кошельки",
    description: "ЮMoney, QIWI, WebMoney",
    details: "Моментальное зачисление платежа после оплаты.",
  },
  InfoCard {
    icon: "Banknote",
    title: "Наличные",
    description: "При получении заказа",
    details: "Оплата наличными курьеру или в пункте выдачи при получении товара.",
  },
];

/// The "why choose us" strip on the catalog page. `details` is unused there.
pub const FEATURES: &[InfoCard] = &[
  InfoCard {
    icon: "Shield",
    title: "Гарантия качества",
    description: "Официальная гарантия на все товары от 1 года",
    details: "",
  },
  InfoCard {
    icon: "Truck",
    title: "Быстрая доставка",
    description: "Доставка по Москве за 1-2 дня, по России за 2-5 дней",
    details: "",
  },
  InfoCard {
    icon: "HeadphonesIcon",
    title: "Поддержка 24/7",
    description: "Ответим на все вопросы в любое время суток",
    details: "",
  },
];

pub const FAQ: &[FaqEntry] = &[
  FaqEntry {
    question: "Можно ли примерить товар перед покупкой?",
    answer: "Да, при курьерской доставке вы можете осмотреть товар перед оплатой. Если товар не подошёл, курьер заберёт его обратно.",
  },
  FaqEntry {
    question: "Как долго хранится заказ в пункте выдачи?",
    answer: "Заказ хранится в пункте выдачи бесплатно в течение 7 дней. После этого срока заказ возвращается отправителю.",
  },
  FaqEntry {
    question: "Можно ли вернуть товар?",
    answer: "Да, вы можете вернуть товар надлежащего качества в течение 14 дней с момента получения. Товар должен сохранить товарный вид и упаковку.",
  },
  FaqEntry {
    question: "Есть ли гарантия на товары?",
    answer: "Все товары имеют официальную гарантию производителя сроком от 1 года. Гарантийный талон вы получите вместе с товаром.",
  },
];

/// Single-open, collapsible accordion over `len` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Accordion {
  len: usize,
  open: Option<usize>,
}

impl Accordion {
  pub fn new(len: usize) -> Self {
    Self { len, open: None }
  }

  /// Opens `index`, closing whichever item was open; toggling the open item
  /// collapses it. Out-of-range indices are ignored. Returns the open item.
  pub fn toggle(&mut self, index: usize) -> Option<usize> {
    if index < self.len {
      self.open = if self.open == Some(index) { None } else { Some(index) };
    }
    self.open
  }

  pub fn open_item(&self) -> Option<usize> {
    self.open
  }

  pub fn is_open(&self, index: usize) -> bool {
    self.open == Some(index)
  }

  pub fn len(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }
}
