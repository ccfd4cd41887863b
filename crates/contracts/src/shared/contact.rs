/// Контактные данные компании, используемые в ссылках и подвале
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfo {
    pub company: &'static str,
    /// Номер в международном формате без знаков, для wa.me и tel:
    pub whatsapp_phone: &'static str,
    pub phone_display: &'static str,
    pub email: &'static str,
    pub instagram_url: &'static str,
    pub location: &'static str,
    pub coverage: &'static str,
}

pub const CONTACT: ContactInfo = ContactInfo {
    company: "Lazarus Technology",
    whatsapp_phone: "5582996878817",
    phone_display: "(82) 9 9687-8817",
    email: "contato@lazarustech.com",
    instagram_url: "https://instagram.com/lazarustech",
    location: "Maceió - AL, Brasil",
    coverage: "Atendemos todo o Brasil remotamente",
};
