//! Reply texts.

use rust_decimal::Decimal;

use crate::domain::{display_price, PriceTable, Tier};
use crate::error::RateError;
use crate::port::ReplyMenu;

/// Caption of the rate button and the text it sends.
pub const RATE_BUTTON: &str = "Актуальный курс";

/// Caption of the about button and the text it sends.
pub const ABOUT_BUTTON: &str = "О нас";

pub const WELCOME_TEXT: &str = "Добро пожаловать! Выберите действие:";

/// Prefix of every failed rate reply.
pub const RATE_ERROR_PREFIX: &str = "Ошибка получения курса: ";

const RATE_HEADER: &str = "КУРС USDT ↔️ RUB\n\
    📍Назрань ул. Московская 4а\n\
    📍Карабулак ул. Осканова 5а";

const RATE_FOOTER: &str = "обменник Cryptoclub ☎️ +7 (918) 813-28-15";

pub const ABOUT_TEXT: &str = "Мы Cryptoclub_zr\n\
    Ваш надежный партнер в мире криптовалюты\n\
    \n\
    • Покупка продажа usdt\n\
    • Вывести деньги с биржи без риска\n\
    • Отправить деньги за границу или принять из-за рубежа\n\
    \n\
    ✅Все сделки строго по законам шариата\n\
    \n\
    Уникальная услуга в РФ🇷🇺\n\
    • В наших офисах P2P вы можете подписать контракт на 4 месяца\n\
    🔥с бесплатным обучением и работой в нашем офисе\n\
    \n\
    🔻Так же продажа и обслуживание майнеров\n\
    \n\
    Наш адрес\n\
    г. Назрань Московская 4а\n\
    г. Карабулак Осканова 5а\n\
    \n\
    📌instagram @cryptoclub_zr\n\
    \n\
    ☎️ +7918 813-28-15\n\
    ☎️+7988-8015-21-37";

/// Main reply menu attached to the welcome message.
#[must_use]
pub fn main_menu() -> ReplyMenu {
    ReplyMenu::single_column([RATE_BUTTON, ABOUT_BUTTON])
}

/// Render the price table with the office header and footer.
#[must_use]
pub fn rate_text(table: &PriceTable) -> String {
    let mut text = String::with_capacity(512);
    text.push_str(RATE_HEADER);

    text.push_str("\n\n☛ МЫ ПОКУПАЕМ USDT У ВАС:\n");
    text.push_str(&tier_lines(table.buy_tiers()));

    text.push_str("\n☛ МЫ ПРОДАЕМ USDT ВАМ:\n");
    text.push_str(&tier_lines(table.sell_tiers()));

    text.push('\n');
    text.push_str(RATE_FOOTER);
    text
}

/// One `• label: price RUB` line per tier.
fn tier_lines(tiers: impl IntoIterator<Item = (Tier, Decimal)>) -> String {
    tiers
        .into_iter()
        .map(|(tier, price)| format!("• {}: {:.2} RUB\n", tier.label(), display_price(price)))
        .collect()
}

/// Render a failed fetch.
#[must_use]
pub fn rate_error_text(error: &RateError) -> String {
    format!("{RATE_ERROR_PREFIX}{error}")
}
