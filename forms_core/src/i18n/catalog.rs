use lazy_static::lazy_static;
use std::collections::HashMap;

use super::{Language, Translator};

lazy_static! {
    static ref TR: HashMap<&'static str, &'static str> = HashMap::from([
        ("siteName", "Aura Smile Studio"),
        ("navHome", "Ana Sayfa"),
        ("navContact", "İletişim"),
        ("navReservation", "Rezervasyon"),
        ("homeTitle", "Aura Smile Studio"),
        ("homeDescription", "Antalya'da diş ve estetik bakım, konaklama ve transfer hizmetleri."),
        ("contactTitle", "İletişim"),
        ("contactDescription", "Sorularınız için bize ulaşın."),
        ("contactGetInTouch", "Bize Ulaşın"),
        ("contactMessage", "Formu doldurun, en kısa sürede size dönüş yapalım."),
        ("contactPhone", "Telefon"),
        ("contactEmail", "E-posta"),
        ("contactAddress", "Adres"),
        ("contactAddressLine", "Lara, Muratpaşa, Antalya"),
        ("contactSendMessage", "Mesaj Gönderin"),
        ("contactFormName", "Adınız"),
        ("contactFormEmail", "E-posta Adresiniz"),
        ("contactFormSubject", "Konu"),
        ("contactFormMessage", "Mesajınız"),
        ("contactFormSubmit", "Gönder"),
        ("contactFormSubmitting", "Gönderiliyor..."),
        ("contactFormSuccess", "Mesajınız başarıyla gönderildi. Teşekkür ederiz!"),
        ("contactFormError", "Mesajınız gönderilemedi. Lütfen tekrar deneyin."),
        ("reservationTitle", "Rezervasyon"),
        ("reservationDescription", "Tedavi ve hizmetleriniz için randevu oluşturun."),
        ("formNameLabel", "Ad Soyad"),
        ("formEmailLabel", "E-posta"),
        ("formPhoneLabel", "Telefon"),
        ("formServiceLabel", "Hizmet"),
        ("formServiceSelectOption", "Hizmet seçiniz"),
        ("formServiceDental", "Diş Tedavisi"),
        ("formServiceAesthetic", "Estetik"),
        ("formServiceAccommodation", "Konaklama"),
        ("formServiceTransfer", "Transfer"),
        ("formServiceTickets", "Uçak Bileti"),
        ("formDateLabel", "Tercih Edilen Tarih"),
        ("formMessageLabel", "Mesajınız"),
        ("formSubmitButton", "Rezervasyon Yap"),
        ("formSubmitting", "Gönderiliyor..."),
        ("formSuccessMessage", "Talebiniz alındı. En kısa sürede sizinle iletişime geçeceğiz."),
        ("formErrorMessage", "Talebiniz gönderilemedi. Lütfen tekrar deneyin."),
    ]);

    static ref EN: HashMap<&'static str, &'static str> = HashMap::from([
        ("navHome", "Home"),
        ("navContact", "Contact"),
        ("navReservation", "Reservation"),
        ("homeDescription", "Dental and aesthetic care, accommodation and transfers in Antalya."),
        ("contactTitle", "Contact"),
        ("contactDescription", "Get in touch with any questions."),
        ("contactGetInTouch", "Get in Touch"),
        ("contactMessage", "Fill in the form and we will get back to you shortly."),
        ("contactPhone", "Phone"),
        ("contactEmail", "Email"),
        ("contactAddress", "Address"),
        ("contactAddressLine", "Lara, Muratpasa, Antalya"),
        ("contactSendMessage", "Send a Message"),
        ("contactFormName", "Your Name"),
        ("contactFormEmail", "Your Email"),
        ("contactFormSubject", "Subject"),
        ("contactFormMessage", "Your Message"),
        ("contactFormSubmit", "Send"),
        ("contactFormSubmitting", "Sending..."),
        ("contactFormSuccess", "Your message was sent. Thank you!"),
        ("contactFormError", "Your message could not be sent. Please try again."),
        ("reservationTitle", "Reservation"),
        ("reservationDescription", "Book an appointment for your treatment or service."),
        ("formNameLabel", "Full Name"),
        ("formEmailLabel", "Email"),
        ("formPhoneLabel", "Phone"),
        ("formServiceLabel", "Service"),
        ("formServiceSelectOption", "Select a service"),
        ("formServiceDental", "Dental Treatment"),
        ("formServiceAesthetic", "Aesthetics"),
        ("formServiceAccommodation", "Accommodation"),
        ("formServiceTransfer", "Transfer"),
        ("formServiceTickets", "Flight Tickets"),
        ("formDateLabel", "Preferred Date"),
        ("formMessageLabel", "Your Message"),
        ("formSubmitButton", "Book Now"),
        ("formSubmitting", "Sending..."),
        ("formSuccessMessage", "Your request was received. We will contact you shortly."),
        ("formErrorMessage", "Your request could not be sent. Please try again."),
    ]);
}

fn table(language: Language) -> &'static HashMap<&'static str, &'static str> {
    match language {
        Language::Tr => &*TR,
        Language::En => &*EN,
    }
}

/// Static string tables. Lookups fall back to Turkish, then to the key itself.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    language: Language,
}

impl Catalog {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        table(self.language)
            .get(key)
            .or_else(|| table(Language::default()).get(key))
            .copied()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl Translator for Catalog {
    fn t(&self, key: &str) -> String {
        match self.lookup(key) {
            Some(text) => text.to_string(),
            None => {
                tracing::debug!(key, language = %self.language, "Missing translation");
                key.to_string()
            }
        }
    }

    fn language(&self) -> Language {
        self.language
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_language() {
        assert_eq!(Catalog::new(Language::Tr).t("contactFormSubmit"), "Gönder");
        assert_eq!(Catalog::new(Language::En).t("contactFormSubmit"), "Send");
    }

    #[test]
    fn test_falls_back_to_default_language() {
        assert_eq!(Catalog::new(Language::En).t("siteName"), "Aura Smile Studio");
    }

    #[test]
    fn test_missing_key_returns_key() {
        assert_eq!(Catalog::new(Language::En).t("noSuchKey"), "noSuchKey");
    }

    #[test]
    fn test_every_english_key_exists_in_turkish() {
        for key in EN.keys() {
            assert!(TR.contains_key(key), "missing Turkish string for {}", key);
        }
    }
}
