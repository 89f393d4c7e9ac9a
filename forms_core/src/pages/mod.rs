//! Server-rendered pages for the site and its two forms

use maud::{html, Markup, DOCTYPE};

use crate::config::SiteConfig;
use crate::forms::{
    Banner, FieldSpec, FormKind, FormPayload, InputKind, SubmitControl, SERVICE_OPTIONS,
};
use crate::i18n::{Language, Translator};

/// Everything the form template needs from a form instance.
#[derive(Debug, Clone)]
pub struct FormView {
    pub kind: FormKind,
    pub values: FormPayload,
    pub banner: Banner,
    pub submit: SubmitControl,
    /// Reload the blank page after this many seconds, hiding the banner.
    /// Only set when the form was cleared, so no typed values are lost.
    pub refresh_after: Option<u64>,
}

fn layout(title: &str, t: &dyn Translator, current: &str, refresh: Option<Markup>, body: Markup) -> Markup {
    let lang = t.language();
    html! {
        (DOCTYPE)
        html lang=(lang.code()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                @if let Some(refresh) = refresh {
                    (refresh)
                }
                title { (title) " | " (t.t("siteName")) }
            }
            body {
                header {
                    nav {
                        a href=(format!("/?lang={}", lang.code())) { (t.t("navHome")) }
                        " "
                        a href=(format!("{}?lang={}", FormKind::Contact.page_path(), lang.code())) { (t.t("navContact")) }
                        " "
                        a href=(format!("{}?lang={}", FormKind::Reservation.page_path(), lang.code())) { (t.t("navReservation")) }
                        " | "
                        @for other in Language::ALL {
                            a href=(format!("{}?lang={}", current, other.code())) hreflang=(other.code()) {
                                (other.code().to_uppercase())
                            }
                            " "
                        }
                    }
                }
                main { (body) }
            }
        }
    }
}

pub fn index_page(t: &dyn Translator) -> Markup {
    let lang = t.language();
    let body = html! {
        section class="page-header" {
            h1 { (t.t("homeTitle")) }
            p { (t.t("homeDescription")) }
        }
        ul {
            li { a href=(format!("/contact?lang={}", lang.code())) { (t.t("contactTitle")) } }
            li { a href=(format!("/reservation?lang={}", lang.code())) { (t.t("reservationTitle")) } }
        }
    };
    layout(&t.t("homeTitle"), t, "/", None, body)
}

pub fn form_page(view: &FormView, site: &SiteConfig, t: &dyn Translator) -> Markup {
    let lang = t.language();
    let path = view.kind.page_path();

    let refresh = view.refresh_after.map(|secs| {
        html! {
            meta http-equiv="refresh" content=(format!("{};url={}?lang={}", secs, path, lang.code()));
        }
    });

    let (title_key, description_key) = match view.kind {
        FormKind::Contact => ("contactTitle", "contactDescription"),
        FormKind::Reservation => ("reservationTitle", "reservationDescription"),
    };

    let body = html! {
        section class="page-header" {
            h1 { (t.t(title_key)) }
            p { (t.t(description_key)) }
        }
        @if view.kind == FormKind::Contact {
            section class="contact-details" {
                h2 { (t.t("contactGetInTouch")) }
                p { (t.t("contactMessage")) }
                dl {
                    dt { (t.t("contactPhone")) }
                    dd { (site.phone) }
                    dt { (t.t("contactEmail")) }
                    dd { (site.email) }
                    dt { (t.t("contactAddress")) }
                    dd { (t.t("contactAddressLine")) }
                }
            }
        }
        section class="form" {
            @if view.kind == FormKind::Contact {
                h2 { (t.t("contactSendMessage")) }
            }
            (form(view, t))
        }
    };

    layout(&t.t(title_key), t, path, refresh, body)
}

fn form(view: &FormView, t: &dyn Translator) -> Markup {
    let action = format!("{}?lang={}", view.kind.page_path(), t.language().code());
    html! {
        form method="post" action=(action) id=(format!("{}-form", view.kind)) {
            @if view.kind == FormKind::Reservation {
                (banner(&view.banner))
            }
            @for spec in view.kind.fields() {
                (field(spec, view.values.get(spec.name).unwrap_or(""), t))
            }
            button type="submit" disabled[view.submit.disabled] { (view.submit.label) }
            @if view.kind == FormKind::Contact {
                (banner(&view.banner))
            }
        }
    }
}

fn field(spec: &FieldSpec, value: &str, t: &dyn Translator) -> Markup {
    html! {
        div class="field" {
            label for=(spec.name) {
                (t.t(spec.label_key))
                @if spec.required { " *" }
            }
            @match spec.input {
                InputKind::TextArea => {
                    textarea id=(spec.name) name=(spec.name) rows="4" required[spec.required] { (value) }
                }
                InputKind::Select => {
                    select id=(spec.name) name=(spec.name) required[spec.required] {
                        option value="" { (t.t("formServiceSelectOption")) }
                        @for option in SERVICE_OPTIONS {
                            option value=(option.value) selected[option.value == value] {
                                (t.t(option.label_key))
                            }
                        }
                    }
                }
                input_kind => {
                    input
                        type=(input_kind.html_type().unwrap_or("text"))
                        id=(spec.name)
                        name=(spec.name)
                        value=(value)
                        required[spec.required];
                }
            }
        }
    }
}

fn banner(banner: &Banner) -> Markup {
    html! {
        @match banner {
            Banner::None => {}
            Banner::Success { message } => {
                div class="banner banner-success" role="status" { (message) }
            }
            Banner::Error { message, debug } => {
                div class="banner banner-error" role="alert" {
                    (message)
                    @if let Some(debug) = debug {
                        div class="debug" { (debug) }
                    }
                }
            }
        }
    }
}
