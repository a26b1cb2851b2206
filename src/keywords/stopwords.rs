//! Per-language stopword tables used to segment candidate phrases.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use super::language::Language;

/// Stopword set for a supported language.
pub fn stopwords(language: Language) -> &'static HashSet<&'static str> {
    match language {
        Language::English => &ENGLISH,
        Language::German => &GERMAN,
        Language::Italian => &ITALIAN,
        Language::Dutch => &DUTCH,
        Language::Portuguese => &PORTUGUESE,
        Language::Spanish => &SPANISH,
        Language::Swedish => &SWEDISH,
    }
}

static ENGLISH: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ENGLISH_WORDS.iter().copied().collect());
static GERMAN: Lazy<HashSet<&'static str>> = Lazy::new(|| GERMAN_WORDS.iter().copied().collect());
static ITALIAN: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ITALIAN_WORDS.iter().copied().collect());
static DUTCH: Lazy<HashSet<&'static str>> = Lazy::new(|| DUTCH_WORDS.iter().copied().collect());
static PORTUGUESE: Lazy<HashSet<&'static str>> =
    Lazy::new(|| PORTUGUESE_WORDS.iter().copied().collect());
static SPANISH: Lazy<HashSet<&'static str>> =
    Lazy::new(|| SPANISH_WORDS.iter().copied().collect());
static SWEDISH: Lazy<HashSet<&'static str>> =
    Lazy::new(|| SWEDISH_WORDS.iter().copied().collect());

const ENGLISH_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "can't", "cannot", "could", "couldn't", "did", "didn't", "do", "does",
    "doesn't", "doing", "don't", "down", "during", "each", "few", "for", "from", "further", "had",
    "hadn't", "has", "hasn't", "have", "haven't", "having", "he", "he'd", "he'll", "he's", "her",
    "here", "here's", "hers", "herself", "him", "himself", "his", "how", "how's", "i", "i'd",
    "i'll", "i'm", "i've", "if", "in", "into", "is", "isn't", "it", "it's", "its", "itself",
    "just", "let's", "me", "more", "most", "mustn't", "my", "myself", "no", "nor", "not", "of",
    "off", "on", "once", "only", "or", "other", "ought", "our", "ours", "ourselves", "out",
    "over", "own", "same", "shan't", "she", "she'd", "she'll", "she's", "should", "shouldn't",
    "so", "some", "such", "than", "that", "that's", "the", "their", "theirs", "them",
    "themselves", "then", "there", "there's", "these", "they", "they'd", "they'll", "they're",
    "they've", "this", "those", "through", "to", "too", "under", "until", "up", "very", "was",
    "wasn't", "we", "we'd", "we'll", "we're", "we've", "were", "weren't", "what", "what's",
    "when", "when's", "where", "where's", "which", "while", "who", "who's", "whom", "why",
    "why's", "will", "with", "won't", "would", "wouldn't", "you", "you'd", "you'll", "you're",
    "you've", "your", "yours", "yourself", "yourselves",
];

const GERMAN_WORDS: &[&str] = &[
    "aber", "alle", "allem", "allen", "aller", "alles", "als", "also", "am", "an", "ander",
    "andere", "anderem", "anderen", "anderer", "anderes", "auch", "auf", "aus", "bei", "bin",
    "bis", "bist", "da", "damit", "dann", "das", "dass", "dein", "deine", "dem", "den", "denn",
    "der", "des", "dessen", "dich", "die", "dies", "diese", "diesem", "diesen", "dieser",
    "dieses", "dir", "doch", "dort", "du", "durch", "ein", "eine", "einem", "einen", "einer",
    "eines", "einig", "einige", "er", "es", "etwas", "euer", "eure", "für", "gegen", "gewesen",
    "hab", "habe", "haben", "hat", "hatte", "hatten", "hier", "hin", "hinter", "ich", "ihm",
    "ihn", "ihnen", "ihr", "ihre", "im", "in", "indem", "ins", "ist", "ja", "jede", "jedem",
    "jeden", "jeder", "jedes", "jene", "jenem", "jenen", "jener", "jenes", "jetzt", "kann",
    "kein", "keine", "können", "könnte", "machen", "man", "manche", "mein", "meine", "mich",
    "mir", "mit", "muss", "musste", "nach", "nicht", "nichts", "noch", "nun", "nur", "ob",
    "oder", "ohne", "sehr", "sein", "seine", "sich", "sie", "sind", "so", "solche", "soll",
    "sollte", "sondern", "sonst", "um", "und", "uns", "unser", "unter", "viel", "vom", "von",
    "vor", "war", "waren", "warst", "was", "weg", "weil", "weiter", "welche", "welchem",
    "welchen", "welcher", "welches", "wenn", "werde", "werden", "wie", "wieder", "will", "wir",
    "wird", "wirst", "wo", "wollen", "wollte", "während", "würde", "würden", "zu", "zum", "zur",
    "zwar", "zwischen", "über",
];

const ITALIAN_WORDS: &[&str] = &[
    "a", "ad", "agli", "ai", "al", "alla", "alle", "allo", "anche", "ancora", "avere", "aveva",
    "avevano", "che", "chi", "ci", "come", "con", "cosa", "cui", "da", "dai", "dal", "dalla",
    "dalle", "degli", "dei", "del", "della", "delle", "dello", "dentro", "di", "dopo", "dove",
    "due", "e", "ecco", "era", "erano", "fa", "fare", "fine", "fino", "fra", "gli", "ha", "hai",
    "hanno", "ho", "i", "il", "in", "invece", "io", "la", "le", "lei", "lo", "loro", "lui",
    "ma", "me", "mentre", "mi", "mia", "mie", "miei", "mio", "molta", "molti", "molto", "ne",
    "nei", "nella", "nelle", "nello", "no", "noi", "non", "nostra", "nostri", "nostro", "o",
    "ogni", "oltre", "ora", "per", "perché", "però", "più", "poco", "poi", "qua", "quale",
    "quando", "quanto", "quasi", "quella", "quelle", "quelli", "quello", "questa", "queste",
    "questi", "questo", "qui", "quindi", "se", "sei", "sembra", "senza", "si", "sia", "siamo",
    "siete", "solo", "sono", "sopra", "sotto", "sta", "stata", "state", "stati", "stato",
    "stesso", "su", "sua", "sue", "sui", "sul", "sulla", "sulle", "suo", "suoi", "tanto", "te",
    "tra", "tre", "tu", "tua", "tue", "tuo", "tutti", "tutto", "un", "una", "uno", "va", "vai",
    "voi", "vostra", "vostri", "vostro",
];

const DUTCH_WORDS: &[&str] = &[
    "aan", "al", "alles", "als", "altijd", "andere", "ben", "bij", "daar", "dan", "dat", "de",
    "der", "deze", "die", "dit", "doch", "doen", "door", "dus", "een", "eens", "en", "er",
    "ge", "geen", "geweest", "haar", "had", "heb", "hebben", "heeft", "hem", "het", "hier",
    "hij", "hoe", "hun", "iemand", "iets", "ik", "in", "is", "ja", "je", "kan", "kon",
    "kunnen", "maar", "me", "meer", "men", "met", "mij", "mijn", "moet", "na", "naar", "niet",
    "niets", "nog", "nu", "of", "om", "omdat", "onder", "ons", "ook", "op", "over", "reeds",
    "te", "tegen", "toch", "toen", "tot", "u", "uit", "uw", "van", "veel", "voor", "want",
    "waren", "was", "wat", "werd", "wezen", "wie", "wil", "worden", "wordt", "zal", "ze",
    "zelf", "zich", "zij", "zijn", "zo", "zonder", "zou",
];

const PORTUGUESE_WORDS: &[&str] = &[
    "a", "ao", "aos", "aquela", "aquelas", "aquele", "aqueles", "aquilo", "as", "até", "com",
    "como", "da", "das", "de", "dela", "delas", "dele", "deles", "depois", "do", "dos", "e",
    "ela", "elas", "ele", "eles", "em", "entre", "era", "eram", "essa", "essas", "esse",
    "esses", "esta", "estamos", "estas", "estava", "estavam", "este", "estes", "esteve",
    "estive", "estivemos", "estiveram", "eu", "foi", "fomos", "for", "foram", "fosse",
    "fossem", "fui", "há", "isso", "isto", "já", "lhe", "lhes", "mais", "mas", "me", "mesmo",
    "meu", "meus", "minha", "minhas", "muito", "na", "nas", "nem", "no", "nos", "nossa",
    "nossas", "nosso", "nossos", "num", "numa", "não", "nós", "o", "os", "ou", "para", "pela",
    "pelas", "pelo", "pelos", "por", "qual", "quando", "que", "quem", "se", "seja", "sejam",
    "sem", "ser", "seu", "seus", "somos", "sou", "sua", "suas", "são", "só", "também", "te",
    "tem", "temos", "tenho", "teu", "teus", "tu", "tua", "tuas", "têm", "um", "uma", "você",
    "vocês", "vos", "à", "às",
];

const SPANISH_WORDS: &[&str] = &[
    "a", "al", "algo", "algunas", "algunos", "ante", "antes", "como", "con", "contra", "cual",
    "cuando", "de", "del", "desde", "donde", "durante", "e", "el", "ella", "ellas", "ellos",
    "en", "entre", "era", "erais", "eran", "eras", "eres", "es", "esa", "esas", "ese", "eso",
    "esos", "esta", "estaba", "estamos", "estar", "este", "esto", "estos", "estoy", "fue",
    "fueron", "fui", "fuimos", "ha", "había", "han", "hasta", "hay", "la", "las", "le", "les",
    "lo", "los", "me", "mi", "mis", "mucho", "muchos", "muy", "más", "nada", "ni", "no", "nos",
    "nosotras", "nosotros", "nuestra", "nuestras", "nuestro", "nuestros", "o", "os", "otra",
    "otras", "otro", "otros", "para", "pero", "poco", "por", "porque", "que", "quien",
    "quienes", "qué", "se", "sea", "sean", "según", "ser", "si", "sido", "siendo", "sin",
    "sobre", "sois", "somos", "son", "soy", "su", "sus", "también", "tanto", "te", "tenemos",
    "tengo", "ti", "tiene", "tienen", "todo", "todos", "tu", "tus", "tuyo", "un", "una", "unas",
    "uno", "unos", "vosotras", "vosotros", "y", "ya", "yo", "él",
];

const SWEDISH_WORDS: &[&str] = &[
    "alla", "allt", "att", "av", "blev", "bli", "blir", "blivit", "de", "dem", "den", "denna",
    "deras", "dess", "dessa", "det", "detta", "dig", "din", "dina", "ditt", "du", "där", "då",
    "efter", "ej", "eller", "en", "er", "era", "ert", "ett", "från", "för", "ha", "hade",
    "han", "hans", "har", "henne", "hennes", "hon", "honom", "hur", "här", "i", "icke",
    "ingen", "inom", "inte", "jag", "ju", "kan", "kunde", "man", "med", "mellan", "men",
    "mig", "min", "mina", "mitt", "mot", "mycket", "ni", "nu", "när", "någon", "något",
    "några", "och", "om", "oss", "på", "samma", "sedan", "sig", "sin", "sina", "själv",
    "skulle", "som", "så", "sådan", "sådana", "sådant", "till", "under", "upp", "ut", "utan",
    "vad", "var", "vara", "varför", "varit", "varje", "vars", "vart", "vem", "vi", "vid",
    "vilka", "vilken", "vilket", "vår", "våra", "vårt", "än", "är", "åt", "över",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_has_stopwords() {
        for language in Language::ALL {
            assert!(
                !stopwords(language).is_empty(),
                "no stopwords for {}",
                language
            );
        }
    }

    #[test]
    fn test_common_words_are_stopwords() {
        assert!(stopwords(Language::English).contains("the"));
        assert!(stopwords(Language::German).contains("und"));
        assert!(stopwords(Language::Spanish).contains("para"));
        assert!(!stopwords(Language::English).contains("mountain"));
    }
}
