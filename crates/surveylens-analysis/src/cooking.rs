//! Cooking method canonicalization

/// Label of a response that did not say how the product was cooked.
pub const UNKNOWN_METHOD: &str = "Unknown";

/// Known spellings and their canonical labels, in match order.
pub static COOKING_ALIASES: &[(&str, &str)] = &[
    ("air fryer", "Air Fryer"),
    ("air fried", "Air Fryer"),
    ("air fry", "Air Fryer"),
    ("airfryer", "Air Fryer"),
    ("air-fryer", "Air Fryer"),
    ("air-fried", "Air Fryer"),
    ("deep fried", "Deep Fried"),
    ("deep fry", "Deep Fried"),
    ("deep-fried", "Deep Fried"),
    ("deep-fry", "Deep Fried"),
    ("fried", "Deep Fried"),
    ("oven", "Oven"),
    ("baked", "Oven"),
    ("bake", "Oven"),
    ("oven baked", "Oven"),
    ("oven-baked", "Oven"),
    ("microwave", "Microwave"),
    ("microwaved", "Microwave"),
    ("microwave oven", "Microwave"),
    ("stovetop", "Stovetop"),
    ("stove top", "Stovetop"),
    ("pan fried", "Stovetop"),
    ("pan-fried", "Stovetop"),
    ("pan fry", "Stovetop"),
    ("sautéed", "Stovetop"),
    ("sauteed", "Stovetop"),
    ("grill", "Grill"),
    ("grilled", "Grill"),
    ("bbq", "Grill"),
    ("barbecue", "Grill"),
];

/// Maps a free-text cooking method to its canonical label.
///
/// Only a missing answer is [`UNKNOWN_METHOD`]. Any given answer is trimmed
/// and lower-cased first, so a blank one stays blank and placeholders such as
/// `n/a` are kept as written. An exact alias wins over a contained one, and contained aliases are tried
/// in table order, so `pan fried` is `Stovetop` but `pan fried then baked`
/// is `Deep Fried`. Unrecognized methods are title-cased.
///
/// # Examples
///
/// ```
/// use surveylens_analysis::cooking::normalize_cooking_method;
///
/// assert_eq!(normalize_cooking_method(Some("Air-Fried")), "Air Fryer");
/// assert_eq!(normalize_cooking_method(Some("in the oven")), "Oven");
/// assert_eq!(normalize_cooking_method(Some("smoked")), "Smoked");
/// assert_eq!(normalize_cooking_method(Some("none")), "None");
/// assert_eq!(normalize_cooking_method(None), "Unknown");
/// ```
#[must_use]
pub fn normalize_cooking_method(method: Option<&str>) -> String {
    let Some(method) = method else {
        return UNKNOWN_METHOD.to_owned();
    };
    let method = method.trim().to_lowercase();

    if let Some((_, label)) = COOKING_ALIASES.iter().find(|(alias, _)| *alias == method) {
        return (*label).to_owned();
    }
    if let Some((_, label)) = COOKING_ALIASES
        .iter()
        .find(|(alias, _)| method.contains(alias))
    {
        return (*label).to_owned();
    }
    title_case(&method)
}

/// Upper-cases the first letter of every alphabetic run, lower-cases the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
