//! Разбор и форматирование цен в реалах ("R$ 1.997,50")
//!
//! Суммы хранятся в целых сентаво, чтобы разбор был точным, а скидки и
//! рассрочка считались без ошибок округления `f64`.

const CURRENCY_SYMBOL: &str = "R$";

/// Разобранная цена: сумма в сентаво и хвост строки после суммы ("/mês", "(único)")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Price {
    pub cents: i64,
    pub suffix: String,
}

impl Price {
    /// Форматирует произвольную сумму с хвостом этой цены
    pub fn display_with(&self, cents: i64) -> String {
        let amount = format_brl(cents);
        if self.suffix.is_empty() {
            amount
        } else if self.suffix.starts_with('/') {
            format!("{}{}", amount, self.suffix)
        } else {
            format!("{} {}", amount, self.suffix)
        }
    }
}

/// Разбор локализованной строки цены.
///
/// Убирает символ валюты, точки-разделители тысяч, десятичную запятую
/// переводит в дробную часть. Возвращает `None`, если строка не начинается
/// с суммы ("Sob consulta") или сумма некорректна.
///
/// # Примеры
/// ```
/// use contracts::shared::price::parse_price;
/// assert_eq!(parse_price("R$ 1.234,56").unwrap().cents, 123456);
/// assert!(parse_price("Sob consulta").is_none());
/// ```
pub fn parse_price(raw: &str) -> Option<Price> {
    let s = raw.trim();
    let s = s.strip_prefix(CURRENCY_SYMBOL).unwrap_or(s).trim_start();

    let amount_len = s
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || *c == '.' || *c == ','))
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    let (amount, rest) = s.split_at(amount_len);

    if !amount.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }

    let (integer_part, fraction_part) = match amount.split_once(',') {
        Some((i, f)) => (i, Some(f)),
        None => (amount, None),
    };

    let integer_digits: String = integer_part.chars().filter(|c| *c != '.').collect();
    let units: i64 = integer_digits.parse().ok()?;

    let fraction_cents: i64 = match fraction_part {
        None => 0,
        Some(f) if (1..=2).contains(&f.len()) && f.chars().all(|c| c.is_ascii_digit()) => {
            let padded = format!("{:0<2}", f);
            padded.parse().ok()?
        }
        Some(_) => return None,
    };

    let cents = units.checked_mul(100)?.checked_add(fraction_cents)?;

    Some(Price {
        cents,
        suffix: rest.trim().to_string(),
    })
}

/// Форматирует сумму в сентаво как "R$ 1.234,56"
pub fn format_brl(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!(
        "{}{} {},{:02}",
        sign,
        CURRENCY_SYMBOL,
        group_thousands(abs / 100),
        abs % 100
    )
}

/// Разделители триад точками: 1234567 -> "1.234.567"
pub fn group_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Результат не больше исходной суммы по модулю, поэтому всегда помещается в i64
fn narrow(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

/// Применяет скидку в процентах с округлением half-up до сентаво.
/// Считается в i128: любая разобранная цена умножается без переполнения.
pub fn apply_discount(cents: i64, percent: u8) -> i64 {
    let kept = 100 - i128::from(percent.min(100));
    narrow((i128::from(cents) * kept + 50).div_euclid(100))
}

/// Сумма одного платежа при рассрочке на `count` частей, half-up до сентаво
pub fn installment_amount(cents: i64, count: u32) -> i64 {
    let count = i128::from(count.max(1));
    narrow((i128::from(cents) * 2 + count).div_euclid(count * 2))
}
