//! French and Hebrew string tables.
//!
//! Keys are dot-separated (`rsvp.submit`, `event.mairie.name`). A missing key
//! resolves to the key itself so a gap in one table shows up on the page
//! instead of breaking rendering.

use crate::events::WeddingEvent;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fr,
    He,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Fr, Language::He];

    pub fn code(self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::He => "he",
        }
    }

    pub fn is_rtl(self) -> bool {
        self == Language::He
    }

    /// Value for the `dir` attribute.
    pub fn dir(self) -> &'static str {
        if self.is_rtl() {
            "rtl"
        } else {
            "ltr"
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language: {0}")]
pub struct UnsupportedLanguage(pub String);

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fr" => Ok(Language::Fr),
            "he" => Ok(Language::He),
            other => Err(UnsupportedLanguage(other.to_string())),
        }
    }
}

type Table = HashMap<&'static str, &'static str>;

static FR_TABLE: Lazy<Table> = Lazy::new(|| FR.iter().copied().collect());
static HE_TABLE: Lazy<Table> = Lazy::new(|| HE.iter().copied().collect());

fn table(lang: Language) -> &'static Table {
    match lang {
        Language::Fr => &FR_TABLE,
        Language::He => &HE_TABLE,
    }
}

/// Translate `key` into `lang`, falling back to the key itself.
pub fn t<'a>(key: &'a str, lang: Language) -> &'a str {
    table(lang).get(key).copied().unwrap_or(key)
}

/// Translate a per-event field such as `name` or `dress_code`.
pub fn event_text(event: &WeddingEvent, field: &str, lang: Language) -> String {
    let key = format!("{}.{}", event.translation_key, field);
    t(&key, lang).to_string()
}

/// Practical-info sections, in display order.
pub const PRACTICAL_SECTIONS: [&str; 6] = [
    "flights",
    "hotels",
    "transport",
    "currency",
    "emergency",
    "weather",
];

/// Event detail rows shown in the modal: (label key, event field).
pub const EVENT_DETAIL_ROWS: [(&str, &str); 6] = [
    ("event.label_date", "date"),
    ("event.label_time", "time"),
    ("event.label_location", "location"),
    ("event.label_address", "address"),
    ("event.label_transport", "transport"),
    ("event.label_dress_code", "dress_code"),
];

const FR: &[(&str, &str)] = &[
    // Hero
    ("hero.title", "Anaël & Eric"),
    ("hero.subtitle", "Nous nous marions !"),
    ("hero.date", "18 – 20 octobre 2026"),
    ("hero.location", "Tel Aviv, Israël"),
    // Countdown
    ("countdown.title", "Plus que"),
    ("countdown.months", "mois"),
    ("countdown.days", "jours"),
    ("countdown.month_singular", "mois"),
    ("countdown.day_singular", "jour"),
    ("countdown.celebration", "C'est le jour J !"),
    // Nav
    ("nav.rsvp", "RSVP"),
    ("nav.lang_fr", "FR"),
    ("nav.lang_he", "עב"),
    ("nav.lang_switch_fr", "Passer en français"),
    ("nav.lang_switch_he", "עברית"),
    ("nav.lang_choice", "Choix de langue"),
    // Event: Mairie
    ("event.mairie.name", "Cérémonie civile"),
    ("event.mairie.date", "18 octobre 2026"),
    ("event.mairie.time", "Horaire à confirmer"),
    ("event.mairie.location", "Mairie de Courbevoie"),
    ("event.mairie.address", "2 place Henri Barbusse, Courbevoie"),
    ("event.mairie.transport", "Gare de Courbevoie (Transilien L) / La Défense (RER A, métro 1)"),
    ("event.mairie.dress_code", "Tenue de ville"),
    ("event.mairie.description", "Cérémonie civile à la mairie de Courbevoie, suivie d'un moment convivial entre proches."),
    // Event: Welcome Dinner
    ("event.welcome_dinner.name", "Dîner de bienvenue"),
    ("event.welcome_dinner.date", "18 octobre 2026"),
    ("event.welcome_dinner.time", "Horaire à confirmer"),
    ("event.welcome_dinner.location", "Neve Tsedek, Tel Aviv"),
    ("event.welcome_dinner.address", "Neve Tsedek, Tel Aviv"),
    ("event.welcome_dinner.transport", "Taxi / à pied depuis le centre"),
    ("event.welcome_dinner.dress_code", "Tenue chic décontractée"),
    ("event.welcome_dinner.description", "Un dîner chaleureux pour se retrouver dans le charmant quartier de Neve Tsedek."),
    // Event: Beach Party
    ("event.beach_party.name", "Beach Party"),
    ("event.beach_party.date", "19 octobre 2026"),
    ("event.beach_party.time", "Horaire à confirmer"),
    ("event.beach_party.location", "Herzliya Marina"),
    ("event.beach_party.address", "Herzliya Marina, Herzliya"),
    ("event.beach_party.transport", "Taxi / Navette"),
    ("event.beach_party.dress_code", "Tenue de plage"),
    ("event.beach_party.description", "Journée en bord de mer à la marina d'Herzliya. Maillot de bain et crème solaire obligatoires !"),
    // Event: Wedding Ceremony
    ("event.wedding_ceremony.name", "Cérémonie & réception"),
    ("event.wedding_ceremony.date", "20 octobre 2026"),
    ("event.wedding_ceremony.time", "Horaire à confirmer"),
    ("event.wedding_ceremony.location", "Achuza, Beit Hanan"),
    ("event.wedding_ceremony.address", "Beit Hanan, Israël"),
    ("event.wedding_ceremony.transport", "Navette depuis Tel Aviv"),
    ("event.wedding_ceremony.dress_code", "Tenue de soirée"),
    ("event.wedding_ceremony.description", "La cérémonie de mariage suivie d'une grande fête sous les étoiles."),
    // Event detail labels
    ("event.label_date", "Date"),
    ("event.label_time", "Heure"),
    ("event.label_location", "Lieu"),
    ("event.label_address", "Adresse"),
    ("event.label_transport", "Transport"),
    ("event.label_dress_code", "Tenue"),
    ("event.label_description", "Description"),
    // RSVP
    ("rsvp.title", "Confirmez votre présence"),
    ("rsvp.subtitle", "Merci de nous faire savoir si vous serez des nôtres."),
    ("rsvp.name_label", "Nom complet"),
    ("rsvp.name_placeholder", "Prénom et nom…"),
    ("rsvp.email_label", "E-mail"),
    ("rsvp.email_placeholder", "votre@email.com…"),
    ("rsvp.events_label", "Événements auxquels vous participerez"),
    ("rsvp.guests_label", "Accompagnants"),
    ("rsvp.guests_description", "Nombre de personnes supplémentaires (hors vous-même)"),
    ("rsvp.dietary_label", "Restrictions alimentaires"),
    ("rsvp.dietary_placeholder", "Végétarien, allergies…"),
    ("rsvp.message_label", "Message (optionnel)"),
    ("rsvp.message_placeholder", "Un petit mot pour les mariés…"),
    ("rsvp.submit", "Envoyer"),
    ("rsvp.submitting", "Envoi en cours…"),
    ("rsvp.success_title", "Merci !"),
    ("rsvp.success_message", "Votre réponse a bien été enregistrée. On a hâte de vous voir !"),
    ("rsvp.error_title", "Erreur"),
    ("rsvp.error_message", "Une erreur est survenue. Veuillez réessayer."),
    ("rsvp.error_timeout", "La requête a expiré. Veuillez réessayer."),
    ("rsvp.error_retry", "Réessayer"),
    ("rsvp.error_name_required", "Le nom est requis."),
    ("rsvp.error_email_invalid", "Adresse e-mail invalide."),
    ("rsvp.error_events_required", "Veuillez sélectionner au moins un événement."),
    ("rsvp.error_guests_invalid", "Entre 0 et 9 accompagnants."),
    // Practical
    ("practical.title", "Infos pratiques"),
    ("practical.flights.title", "Vols vers Tel Aviv"),
    ("practical.flights.content", "L'aéroport Ben Gourion (TLV) est à 20 min de Tel Aviv. Vols directs depuis Paris CDG avec El Al, Air France et Transavia. Réservez tôt pour les meilleurs tarifs."),
    ("practical.hotels.title", "Hébergement"),
    ("practical.hotels.content", "Quartiers recommandés : Neve Tsedek (charme), Jaffa (authenticité), centre de Tel Aviv (vie nocturne). AirBnB et hôtels disponibles pour tous budgets."),
    ("practical.transport.title", "Se déplacer"),
    ("practical.transport.content", "Taxis : app Gett (équivalent Uber). Bus et trains fiables. Des navettes seront organisées pour le mariage. Le permis de conduire français est valide en Israël."),
    ("practical.currency.title", "Monnaie"),
    ("practical.currency.content", "Shekel israélien (₪ / ILS). Cartes bancaires acceptées partout. Distributeurs dans tout Tel Aviv. Taux de change approximatif : 1 € ≈ 4 ₪."),
    ("practical.emergency.title", "Urgences"),
    ("practical.emergency.content", "Police : 100 · Ambulance : 101 · Pompiers : 102. Ambassade de France à Tel Aviv : +972 3 520 8500. Aucun visa requis pour les ressortissants français."),
    ("practical.weather.title", "Météo & conseils"),
    ("practical.weather.content", "Octobre en Israël : ~25°C, ensoleillé et agréable. Prévoyez crème solaire, chapeau et tenue légère en journée. Les soirées peuvent être fraîches en bord de mer."),
    // Footer
    ("footer.made_with_love", "Fait avec amour par les mariés"),
    ("footer.copyright", "© 2026 Anaël & Eric"),
    ("footer.from_with_love", "Avec amour, de Paris à Tel Aviv"),
    // Globe
    ("globe.aria_label", "Globe interactif montrant le parcours Paris – Tel Aviv"),
    ("globe.static_aria_label", "Carte du parcours Paris – Tel Aviv"),
    ("globe.section_title", "Notre voyage"),
    ("globe.scroll_hint", "Faites défiler pour explorer"),
    // Travel
    ("travel.title", "Le programme"),
    ("travel.aria_label", "Parcours illustré des événements"),
    // Accessibility
    ("a11y.skip_to_content", "Aller au contenu"),
    ("a11y.lang_changed", "Langue changée en français"),
    ("a11y.close", "Fermer"),
];

const HE: &[(&str, &str)] = &[
    // Hero
    ("hero.title", "אנאל ואריק"),
    ("hero.subtitle", "אנחנו מתחתנים!"),
    ("hero.date", "18 – 20 באוקטובר 2026"),
    ("hero.location", "תל אביב, ישראל"),
    // Countdown
    ("countdown.title", "עוד"),
    ("countdown.months", "חודשים"),
    ("countdown.days", "ימים"),
    ("countdown.month_singular", "חודש"),
    ("countdown.day_singular", "יום"),
    ("countdown.celebration", "היום הגדול הגיע!"),
    // Nav
    ("nav.rsvp", "אישור הגעה"),
    ("nav.lang_fr", "FR"),
    ("nav.lang_he", "עב"),
    ("nav.lang_switch_fr", "Passer en français"),
    ("nav.lang_switch_he", "לעברית"),
    ("nav.lang_choice", "בחירת שפה"),
    // Event: Mairie
    ("event.mairie.name", "טקס אזרחי"),
    ("event.mairie.date", "18 באוקטובר 2026"),
    ("event.mairie.time", "השעה תעודכן בהמשך"),
    ("event.mairie.location", "עיריית קורבווא"),
    ("event.mairie.address", "2 פלאס אנרי ברביס, קורבווא"),
    ("event.mairie.transport", "תחנת קורבווא (Transilien L) / לה דפאנס (RER A, מטרו 1)"),
    ("event.mairie.dress_code", "לבוש עירוני"),
    ("event.mairie.description", "טקס אזרחי בעיריית קורבווא, ולאחריו כיבוד קל במעגל משפחתי."),
    // Event: Welcome Dinner
    ("event.welcome_dinner.name", "ארוחת ערב חגיגית"),
    ("event.welcome_dinner.date", "18 באוקטובר 2026"),
    ("event.welcome_dinner.time", "השעה תעודכן בהמשך"),
    ("event.welcome_dinner.location", "נווה צדק, תל אביב"),
    ("event.welcome_dinner.address", "נווה צדק, תל אביב"),
    ("event.welcome_dinner.transport", "מונית / הליכה מהמרכז"),
    ("event.welcome_dinner.dress_code", "שיק אלגנטי"),
    ("event.welcome_dinner.description", "ארוחת ערב חמה בשכונה הקסומה של נווה צדק."),
    // Event: Beach Party
    ("event.beach_party.name", "מסיבת חוף"),
    ("event.beach_party.date", "19 באוקטובר 2026"),
    ("event.beach_party.time", "השעה תעודכן בהמשך"),
    ("event.beach_party.location", "מרינה הרצליה"),
    ("event.beach_party.address", "מרינה הרצליה, הרצליה"),
    ("event.beach_party.transport", "מונית / הסעה"),
    ("event.beach_party.dress_code", "לבוש חוף"),
    ("event.beach_party.description", "יום שלם על חוף הים במרינה של הרצליה. אל תשכחו בגד ים וקרם הגנה!"),
    // Event: Wedding Ceremony
    ("event.wedding_ceremony.name", "חתונה"),
    ("event.wedding_ceremony.date", "20 באוקטובר 2026"),
    ("event.wedding_ceremony.time", "השעה תעודכן בהמשך"),
    ("event.wedding_ceremony.location", "אחוזה, בית חנן"),
    ("event.wedding_ceremony.address", "בית חנן, ישראל"),
    ("event.wedding_ceremony.transport", "הסעה מתל אביב"),
    ("event.wedding_ceremony.dress_code", "לבוש ערב"),
    ("event.wedding_ceremony.description", "טקס החתונה ולאחריו חגיגה גדולה מתחת לכוכבים."),
    // Event detail labels
    ("event.label_date", "תאריך"),
    ("event.label_time", "שעה"),
    ("event.label_location", "מקום"),
    ("event.label_address", "כתובת"),
    ("event.label_transport", "הגעה"),
    ("event.label_dress_code", "לבוש"),
    ("event.label_description", "תיאור"),
    // RSVP
    ("rsvp.title", "אישור הגעה"),
    ("rsvp.subtitle", "נשמח לדעת אם תוכלו להגיע."),
    ("rsvp.name_label", "שם מלא"),
    ("rsvp.name_placeholder", "שם פרטי ומשפחה"),
    ("rsvp.email_label", "אימייל"),
    ("rsvp.email_placeholder", "your@email.com"),
    ("rsvp.events_label", "לאילו אירועים תגיעו?"),
    ("rsvp.guests_label", "מלווים"),
    ("rsvp.guests_description", "מספר אנשים נוספים (מלבדכם)"),
    ("rsvp.dietary_label", "מגבלות תזונתיות"),
    ("rsvp.dietary_placeholder", "צמחוני, אלרגיות…"),
    ("rsvp.message_label", "הודעה (אופציונלי)"),
    ("rsvp.message_placeholder", "כמה מילים לזוג…"),
    ("rsvp.submit", "שליחה"),
    ("rsvp.submitting", "שולח…"),
    ("rsvp.success_title", "תודה!"),
    ("rsvp.success_message", "התשובה שלכם נרשמה. מחכים לראות אתכם!"),
    ("rsvp.error_title", "שגיאה"),
    ("rsvp.error_message", "אירעה שגיאה. נסו שוב."),
    ("rsvp.error_timeout", "הבקשה ארכה יותר מדי. נסו שוב."),
    ("rsvp.error_retry", "נסו שוב"),
    ("rsvp.error_name_required", "שם הוא שדה חובה."),
    ("rsvp.error_email_invalid", "כתובת אימייל לא תקינה."),
    ("rsvp.error_events_required", "יש לבחור לפחות אירוע אחד."),
    ("rsvp.error_guests_invalid", "בין 0 ל-9 מלווים."),
    // Practical
    ("practical.title", "מידע מעשי"),
    ("practical.flights.title", "טיסות לתל אביב"),
    ("practical.flights.content", "נמל התעופה בן גוריון (TLV) נמצא כ-20 דקות מתל אביב. טיסות ישירות מפריז CDG עם אל על, אייר פראנס וטרנסאוויה. הזמינו מוקדם למחירים הטובים ביותר."),
    ("practical.hotels.title", "לינה"),
    ("practical.hotels.content", "שכונות מומלצות: נווה צדק (קסם), יפו (אותנטיות), מרכז תל אביב (חיי לילה). AirBnB ומלונות לכל תקציב."),
    ("practical.transport.title", "תחבורה"),
    ("practical.transport.content", "מוניות: אפליקציית Gett (כמו Uber). אוטובוסים ורכבות אמינים. הסעות יאורגנו לחתונה. רישיון נהיגה צרפתי תקף בישראל."),
    ("practical.currency.title", "מטבע"),
    ("practical.currency.content", "שקל ישראלי (₪ / ILS). כרטיסי אשראי מתקבלים בכל מקום. כספומטים בכל תל אביב. שער חליפין משוער: 1 € ≈ 4 ₪."),
    ("practical.emergency.title", "חירום"),
    ("practical.emergency.content", "משטרה: 100 · מד\"א: 101 · כיבוי אש: 102. שגרירות צרפת בתל אביב: +972 3 520 8500. לא נדרשת ויזה לאזרחי צרפת."),
    ("practical.weather.title", "מזג אוויר וטיפים"),
    ("practical.weather.content", "אוקטובר בישראל: כ-25°C, שמשי ונעים. קחו קרם הגנה, כובע ולבוש קל ליום. הערבים ליד הים עלולים להיות קרירים."),
    // Footer
    ("footer.made_with_love", "נעשה באהבה על ידי הזוג"),
    ("footer.copyright", "© 2026 אנאל ואריק"),
    ("footer.from_with_love", "באהבה, מפריז לתל אביב"),
    // Globe
    ("globe.aria_label", "גלובוס אינטראקטיבי המציג את המסלול פריז – תל אביב"),
    ("globe.static_aria_label", "מפת המסלול פריז – תל אביב"),
    ("globe.section_title", "המסע שלנו"),
    ("globe.scroll_hint", "גללו כדי לחקור"),
    // Travel
    ("travel.title", "התוכנית"),
    ("travel.aria_label", "מסלול מאויר של האירועים"),
    // Accessibility
    ("a11y.skip_to_content", "דלג לתוכן"),
    ("a11y.lang_changed", "השפה שונתה לעברית"),
    ("a11y.close", "סגירה"),
];
