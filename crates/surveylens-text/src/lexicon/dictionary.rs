//! Part-of-speech dictionary and adjective inventory
//!
//! Word lists are lower-case. Group order in [`TAGGED_WORDS`] matters: a word
//! listed in more than one group takes the tag of the first.

use crate::pos::PosTag;

pub(super) static TAGGED_WORDS: &[(PosTag, &[&str])] = &[
    (
        PosTag::Dt,
        &[
            "a", "an", "the", "this", "that", "these", "those", "every", "each", "some", "any",
            "no", "another", "either", "neither",
        ],
    ),
    (PosTag::Pdt, &["all", "both", "half", "such"]),
    (
        PosTag::PrpPossessive,
        &["my", "your", "his", "her", "its", "our", "their"],
    ),
    (
        PosTag::Prp,
        &[
            "i", "me", "you", "he", "him", "she", "it", "we", "us", "they", "them", "myself",
            "yourself", "himself", "herself", "itself", "ourselves", "themselves",
        ],
    ),
    (PosTag::Ex, &["there"]),
    (PosTag::Wdt, &["which", "whatever"]),
    (PosTag::Wp, &["what", "who", "whom"]),
    (PosTag::Wrb, &["when", "where", "why", "how"]),
    (PosTag::Cc, &["and", "or", "but", "nor", "yet", "plus"]),
    (PosTag::To, &["to"]),
    (
        PosTag::Md,
        &[
            "can", "could", "will", "would", "shall", "should", "may", "might", "must", "wo", "ca",
        ],
    ),
    (
        PosTag::In,
        &[
            "in", "on", "at", "of", "for", "with", "from", "by", "about", "as", "into", "like",
            "through", "after", "over", "between", "against", "during", "without", "before",
            "under", "around", "among", "than", "because", "if", "while", "although", "though",
            "since", "until", "unlike", "despite", "near", "per", "via", "upon", "within",
            "behind", "besides", "except", "across", "towards", "toward",
        ],
    ),
    (PosTag::Rp, &["up", "out", "off", "down"]),
    (
        PosTag::Rb,
        &[
            "not", "n't", "very", "too", "so", "quite", "really", "rather", "just", "also",
            "only", "even", "again", "still", "almost", "always", "never", "maybe", "perhaps",
            "definitely", "probably", "slightly", "extremely", "super", "overly", "somewhat",
            "fairly", "incredibly", "totally", "completely", "absolutely", "well", "enough",
            "much", "here", "then", "now", "once", "however", "overall", "especially",
            "actually", "kinda", "abit", "already", "ever", "often", "sometimes", "usually",
            "instead", "else", "together", "anyway",
        ],
    ),
    (PosTag::Jjr, &["better", "worse", "more", "less"]),
    (PosTag::Jjs, &["best", "worst", "most", "least"]),
    (
        PosTag::Uh,
        &["yes", "yeah", "wow", "oh", "hmm", "please", "thanks"],
    ),
    (
        PosTag::Vbz,
        &[
            "is", "has", "does", "tastes", "looks", "seems", "feels", "smells", "needs", "gets",
            "makes", "goes", "comes",
        ],
    ),
    (
        PosTag::Vbp,
        &[
            "are", "am", "have", "do", "love", "enjoy", "prefer", "think", "want", "need", "get",
            "make", "go", "come", "eat", "buy", "try", "know", "use", "seem", "feel",
        ],
    ),
    (
        PosTag::Vbd,
        &[
            "was", "were", "had", "did", "liked", "loved", "enjoyed", "preferred", "thought",
            "found", "made", "bought", "tried", "needed", "wanted", "said", "felt", "tasted",
            "smelled", "smelt", "looked", "seemed", "went", "came", "got", "gave", "took",
            "used", "ate", "became", "cooked", "heated", "reheated", "served", "turned",
            "stayed", "remained", "arrived", "expected", "noticed", "added", "kept", "left",
            "put", "fried", "baked", "grilled", "microwaved",
        ],
    ),
    (
        PosTag::Vbn,
        &["been", "eaten", "given", "taken", "done", "gone", "seen", "known"],
    ),
    (
        PosTag::Vbg,
        &[
            "being", "having", "eating", "cooking", "trying", "getting", "making", "going",
            "using",
        ],
    ),
    (PosTag::Vb, &["be"]),
];

/// Base-form adjectives; also the lemma inventory for comparatives.
pub(super) static ADJECTIVES: &[&str] = &[
    "good", "great", "nice", "bad", "tasty", "delicious", "juicy", "crispy", "crisp", "crunchy",
    "tender", "moist", "dry", "soggy", "greasy", "oily", "fatty", "salty", "sweet", "sour",
    "bitter", "spicy", "hot", "mild", "smoky", "bland", "tasteless", "flavorful", "flavourful",
    "flavorless", "flavourless", "fresh", "stale", "old", "new", "soft", "hard", "tough",
    "chewy", "rubbery", "mushy", "watery", "burnt", "burned", "charred", "overcooked",
    "undercooked", "overdone", "rich", "light", "heavy", "thick", "thin", "big", "small",
    "large", "little", "tiny", "huge", "warm", "cold", "cool", "wet", "fine", "decent",
    "average", "okay", "ok", "excellent", "amazing", "wonderful", "awesome", "fantastic",
    "perfect", "lovely", "pleasant", "terrible", "awful", "horrible", "disgusting", "poor",
    "weak", "strong", "satisfying", "succulent", "yummy", "scrumptious", "delectable",
    "appetizing", "unappetizing", "aromatic", "savory", "savoury", "sugary", "sugared",
    "salted", "dense", "flaky", "golden", "brown", "black", "red", "green", "purple", "yellow",
    "white", "pale", "sticky", "smooth", "rough", "lumpy", "tangy", "zesty", "peppery",
    "cheesy", "meaty", "saucy", "buttery", "doughy", "fluffy", "crumbly", "gooey", "messy",
    "easy", "quick", "cheap", "expensive", "healthy", "happy", "sad", "full", "empty",
    "simple", "plain", "different", "similar", "real", "clean", "generic", "artificial",
    "natural", "fake", "authentic", "delicate", "pungent", "rancid", "dried", "dehydrated",
    "boring", "interesting", "pretty", "friendly", "ugly", "early", "smelly", "chilly",
    "disappointing", "overpowering", "underwhelming", "overwhelming", "appealing", "tempting",
    "strange", "odd", "weird", "unusual", "wrong", "right", "favourite", "favorite",
    "homemade", "overpriced", "mediocre", "subtle", "intense", "ideal", "regular", "sure",
];

/// Irregular comparison forms mapped to their base adjective.
pub(super) static ADJECTIVE_EXCEPTIONS: &[(&str, &str)] = &[
    ("better", "good"),
    ("best", "good"),
    ("worse", "bad"),
    ("worst", "bad"),
    ("older", "old"),
    ("oldest", "old"),
    ("elder", "old"),
    ("more", "much"),
    ("most", "much"),
    ("less", "little"),
    ("least", "little"),
    ("further", "far"),
    ("farther", "far"),
    ("furthest", "far"),
];

pub(super) static NOUNS: &[&str] = &[
    "chicken", "sauce", "pastry", "pocket", "flavour", "flavor", "taste", "texture", "filling",
    "portion", "size", "kids", "kid", "children", "child", "family", "husband", "wife",
    "partner", "crust", "meat", "bbq", "barbecue", "smoke", "salt", "sugar", "spice", "heat",
    "bite", "lunch", "dinner", "breakfast", "snack", "product", "price", "packaging", "oven",
    "fryer", "microwave", "minute", "minutes", "time", "amount", "bit", "lot", "quality",
    "variety", "gravy", "curry", "honey", "jelly", "pepper", "onion", "cheese", "bread", "pie",
    "version", "one", "thing", "things", "inside", "outside", "middle", "edge", "aftertaste",
    "smell", "aroma", "colour", "color", "appearance", "look", "money", "value",
    "consistency", "quantity", "party", "body", "day", "way", "week", "option", "recipe",
    "dough", "mix", "batch", "pack", "box", "serving", "meal", "sandwich", "bacon", "beef",
    "pork", "turkey", "vegetables", "corn", "tomato", "garlic", "herbs", "mayo", "ketchup",
    "mustard", "vinegar", "juice", "water", "oil", "fat", "grease", "butter", "burger",
    "pastries", "fun", "plastic", "berry", "cherry", "strawberry", "celery", "energy",
];

/// Nouns read as adjectives after a copula or degree adverb.
pub(super) static ADJECTIVAL_NOUNS: &[&str] = &["filling", "fun", "plastic"];

/// Linking verbs after which a participle or adjectival noun is predicative.
pub(super) static COPULAS: &[&str] = &[
    "is", "are", "am", "was", "were", "be", "been", "being", "'s", "seem", "seems", "seemed",
    "look", "looks", "looked", "taste", "tastes", "tasted", "feel", "feels", "felt", "smell",
    "smells", "smelled", "smelt", "become", "becomes", "became", "get", "gets", "got", "remain",
    "remains", "remained", "stay", "stays", "stayed", "turned", "came",
];

pub(super) static DEGREE_MODIFIERS: &[&str] = &[
    "very", "too", "so", "quite", "really", "rather", "pretty", "slightly", "extremely",
    "super", "overly", "somewhat", "fairly", "incredibly", "totally", "completely",
    "absolutely", "bit", "little", "not", "n't", "well", "more", "less", "most", "kinda",
];
