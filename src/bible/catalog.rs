//! Per-language book catalogs.
//!
//! Each catalog lists the 66 canonical books in that language's script.
//! Position `i` in every catalog names the same book, and is the index of
//! that book in the language's verse document.

use crate::constants::catalog::{BOOK_COUNT, DOCUMENT_DIR};
use crate::types::BookIndex;

/// Ordered canonical book names for one language.
pub type BookCatalog = [&'static str; BOOK_COUNT];

/// Languages with a verse document and book catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    /// English (`en`).
    English,
    /// Tamil (`ta`).
    Tamil,
    /// Kannada (`kn`).
    Kannada,
    /// Telugu (`te`).
    Telugu,
    /// Hindi (`hi`).
    Hindi,
    /// Malayalam (`ml`).
    Malayalam,
    /// Marathi (`mr`).
    Marathi,
    /// Bengali (`bn`).
    Bengali,
    /// Gujarati (`gu`).
    Gujarati,
    /// Punjabi (`pa`).
    Punjabi,
}

impl Language {
    /// Returns all supported languages in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::English,
            Self::Tamil,
            Self::Kannada,
            Self::Telugu,
            Self::Hindi,
            Self::Malayalam,
            Self::Marathi,
            Self::Bengali,
            Self::Gujarati,
            Self::Punjabi,
        ]
    }

    /// ISO 639-1 code used by the site's locale switcher.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Tamil => "ta",
            Self::Kannada => "kn",
            Self::Telugu => "te",
            Self::Hindi => "hi",
            Self::Malayalam => "ml",
            Self::Marathi => "mr",
            Self::Bengali => "bn",
            Self::Gujarati => "gu",
            Self::Punjabi => "pa",
        }
    }

    /// Returns the English name of this language.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Tamil => "Tamil",
            Self::Kannada => "Kannada",
            Self::Telugu => "Telugu",
            Self::Hindi => "Hindi",
            Self::Malayalam => "Malayalam",
            Self::Marathi => "Marathi",
            Self::Bengali => "Bengali",
            Self::Gujarati => "Gujarati",
            Self::Punjabi => "Punjabi",
        }
    }

    /// Look up a language by its code, ignoring case and surrounding space.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::all()
            .iter()
            .copied()
            .find(|l| l.code().eq_ignore_ascii_case(code))
    }

    /// The book catalog for this language.
    #[must_use]
    pub fn catalog(self) -> &'static BookCatalog {
        match self {
            Self::English => &ENGLISH,
            Self::Tamil => &TAMIL,
            Self::Kannada => &KANNADA,
            Self::Telugu => &TELUGU,
            Self::Hindi => &HINDI,
            Self::Malayalam => &MALAYALAM,
            Self::Marathi => &MARATHI,
            Self::Bengali => &BENGALI,
            Self::Gujarati => &GUJARATI,
            Self::Punjabi => &PUNJABI,
        }
    }

    /// Relative path of this language's verse document.
    pub fn document_path(self) -> String {
        format!("{DOCUMENT_DIR}/{}.json", self.code())
    }
}

/// Exact (trimmed) name match against a catalog. No case folding or
/// fuzzy matching: persisted names must be spelled as the catalog spells them.
pub fn book_index(catalog: &BookCatalog, name: &str) -> Option<BookIndex> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    catalog.iter().position(|b| *b == name).map(BookIndex::new)
}

/// Catalog name at a position, if in range.
pub fn book_name(catalog: &BookCatalog, index: BookIndex) -> Option<&'static str> {
    catalog.get(index.get()).copied()
}

/// English catalog.
pub static ENGLISH: BookCatalog = [
    "Genesis",
    "Exodus",
    "Leviticus",
    "Numbers",
    "Deuteronomy",
    "Joshua",
    "Judges",
    "Ruth",
    "1 Samuel",
    "2 Samuel",
    "1 Kings",
    "2 Kings",
    "1 Chronicles",
    "2 Chronicles",
    "Ezra",
    "Nehemiah",
    "Esther",
    "Job",
    "Psalms",
    "Proverbs",
    "Ecclesiastes",
    "Song of Solomon",
    "Isaiah",
    "Jeremiah",
    "Lamentations",
    "Ezekiel",
    "Daniel",
    "Hosea",
    "Joel",
    "Amos",
    "Obadiah",
    "Jonah",
    "Micah",
    "Nahum",
    "Habakkuk",
    "Zephaniah",
    "Haggai",
    "Zechariah",
    "Malachi",
    "Matthew",
    "Mark",
    "Luke",
    "John",
    "Acts",
    "Romans",
    "1 Corinthians",
    "2 Corinthians",
    "Galatians",
    "Ephesians",
    "Philippians",
    "Colossians",
    "1 Thessalonians",
    "2 Thessalonians",
    "1 Timothy",
    "2 Timothy",
    "Titus",
    "Philemon",
    "Hebrews",
    "James",
    "1 Peter",
    "2 Peter",
    "1 John",
    "2 John",
    "3 John",
    "Jude",
    "Revelation",
];

/// Tamil catalog.
pub static TAMIL: BookCatalog = [
    "ஆதியாகமம்",
    "யாத்திராகமம்",
    "லேவியராகமம்",
    "எண்ணாகமம்",
    "உபாகமம்",
    "யோசுவா",
    "நியாயாதிபதிகள்",
    "ரூத்",
    "1 சாமுவேல்",
    "2 சாமுவேல்",
    "1 இராஜாக்கள்",
    "2 இராஜாக்கள்",
    "1 நாளாகமம்",
    "2 நாளாகமம்",
    "எஸ்றா",
    "நெகேமியா",
    "எஸ்தர்",
    "யோபு",
    "சங்கீதம்",
    "நீதிமொழிகள்",
    "பிரசங்கி",
    "உன்னதப்பாட்டு",
    "ஏசாயா",
    "எரேமியா",
    "புலம்பல்",
    "எசேக்கியேல்",
    "தானியேல்",
    "ஓசியா",
    "யோவேல்",
    "ஆமோஸ்",
    "ஒபதியா",
    "யோனா",
    "மீகா",
    "நாகூம்",
    "ஆபகூக்",
    "செப்பனியா",
    "ஆகாய்",
    "சகரியா",
    "மல்கியா",
    "மத்தேயு",
    "மாற்கு",
    "லூக்கா",
    "யோவான்",
    "அப்போஸ்தலருடைய நடபடிகள்",
    "ரோமர்",
    "1 கொரிந்தியர்",
    "2 கொரிந்தியர்",
    "கலாத்தியர்",
    "எபேசியர்",
    "பிலிப்பியர்",
    "கொலோசெயர்",
    "1 தெசலோனிக்கேயர்",
    "2 தெசலோனிக்கேயர்",
    "1 தீமோத்தேயு",
    "2 தீமோத்தேயு",
    "தீத்து",
    "பிலேமோன்",
    "எபிரெயர்",
    "யாக்கோபு",
    "1 பேதுரு",
    "2 பேதுரு",
    "1 யோவான்",
    "2 யோவான்",
    "3 யோவான்",
    "யூதா",
    "வெளிப்படுத்தின விசேஷம்",
];

/// Kannada catalog.
pub static KANNADA: BookCatalog = [
    "ಆದಿಕಾಂಡ",
    "ವಿಮೋಚನಕಾಂಡ",
    "ಯಾಜಕಕಾಂಡ",
    "ಅರಣ್ಯಕಾಂಡ",
    "ಧರ್ಮೋಪದೇಶಕಾಂಡ",
    "ಯೆಹೋಶುವ",
    "ನ್ಯಾಯಸ್ಥಾಪಕರು",
    "ರೂತಳು",
    "1 ಸಮುವೇಲನು",
    "2 ಸಮುವೇಲನು",
    "1 ಅರಸುಗಳು",
    "2 ಅರಸುಗಳು",
    "1 ಪೂರ್ವಕಾಲವೃತ್ತಾಂತ",
    "2 ಪೂರ್ವಕಾಲವೃತ್ತಾಂತ",
    "ಎಜ್ರನು",
    "ನೆಹೆಮೀಯ",
    "ಎಸ್ತೇರಳು",
    "ಯೋಬನು",
    "ಕೀರ್ತನೆಗಳು",
    "ಜ್ಞಾನೋಕ್ತಿಗಳು",
    "ಪ್ರಸಂಗಿ",
    "ಪರಮಗೀತೆ",
    "ಯೆಶಾಯ",
    "ಯೆರೆಮೀಯ",
    "ಪ್ರಲಾಪಗಳು",
    "ಯೆಹೆಜ್ಕೇಲನು",
    "ದಾನಿಯೇಲನು",
    "ಹೋಶೇಯ",
    "ಯೋವೇಲ",
    "ಆಮೋಸ",
    "ಓಬದ್ಯ",
    "ಯೋನ",
    "ಮೀಕ",
    "ನಹೂಮ",
    "ಹಬಕ್ಕೂಕ್ಕ",
    "ಚೆಫನ್ಯ",
    "ಹಗ್ಗಾಯ",
    "ಜೆಕರ್ಯ",
    "ಮಲಾಕಿಯ",
    "ಮತ್ತಾಯನು",
    "ಮಾರ್ಕನು",
    "ಲೂಕನು",
    "ಯೋಹಾನನು",
    "ಅಪೊಸ್ತಲರ ಕೃತ್ಯಗಳು",
    "ರೋಮಾಪುರದವರಿಗೆ",
    "1 ಕೊರಿಂಥದವರಿಗೆ",
    "2 ಕೊರಿಂಥದವರಿಗೆ",
    "ಗಲಾತ್ಯದವರಿಗೆ",
    "ಎಫೆಸದವರಿಗೆ",
    "ಫಿಲಿಪ್ಪಿಯವರಿಗೆ",
    "ಕೊಲೊಸ್ಸೆಯವರಿಗೆ",
    "1 ಥೆಸಲೊನೀಕದವರಿಗೆ",
    "2 ಥೆಸಲೊನೀಕದವರಿಗೆ",
    "1 ತಿಮೊಥೆಯನಿಗೆ",
    "2 ತಿಮೊಥೆಯನಿಗೆ",
    "ತೀತನಿಗೆ",
    "ಫಿಲೆಮೋನನಿಗೆ",
    "ಇಬ್ರಿಯರಿಗೆ",
    "ಯಾಕೋಬನು",
    "1 ಪೇತ್ರನು",
    "2 ಪೇತ್ರನು",
    "1 ಯೋಹಾನನು",
    "2 ಯೋಹಾನನು",
    "3 ಯೋಹಾನನು",
    "ಯೂದನು",
    "ಪ್ರಕಟನೆ",
];

/// Telugu catalog.
pub static TELUGU: BookCatalog = [
    "ఆదికాండము",
    "నిర్గమకాండము",
    "లేవీయకాండము",
    "సంఖ్యాకాండము",
    "ద్వితీయోపదేశకాండము",
    "యెహోషువ",
    "న్యాయాధిపతులు",
    "రూతు",
    "1 సమూయేలు",
    "2 సమూయేలు",
    "1 రాజులు",
    "2 రాజులు",
    "1 దినవృత్తాంతములు",
    "2 దినవృత్తాంతములు",
    "ఎజ్రా",
    "నెహెమ్యా",
    "ఎస్తేరు",
    "యోబు",
    "కీర్తనల గ్రంథము",
    "సామెతలు",
    "ప్రసంగి",
    "పరమగీతము",
    "యెషయా",
    "యిర్మీయా",
    "విలాపవాక్యములు",
    "యెహెజ్కేలు",
    "దానియేలు",
    "హోషేయ",
    "యోవేలు",
    "ఆమోసు",
    "ఓబద్యా",
    "యోనా",
    "మీకా",
    "నహూము",
    "హబక్కూకు",
    "జెఫన్యా",
    "హగ్గయి",
    "జెకర్యా",
    "మలాకీ",
    "మత్తయి",
    "మార్కు",
    "లూకా",
    "యోహాను",
    "అపొస్తలుల కార్యములు",
    "రోమీయులకు",
    "1 కొరింథీయులకు",
    "2 కొరింథీయులకు",
    "గలతీయులకు",
    "ఎఫెసీయులకు",
    "ఫిలిప్పీయులకు",
    "కొలొస్సయులకు",
    "1 థెస్సలొనీకయులకు",
    "2 థెస్సలొనీకయులకు",
    "1 తిమోతికి",
    "2 తిమోతికి",
    "తీతుకు",
    "ఫిలేమోనుకు",
    "హెబ్రీయులకు",
    "యాకోబు",
    "1 పేతురు",
    "2 పేతురు",
    "1 యోహాను",
    "2 యోహాను",
    "3 యోహాను",
    "యూదా",
    "ప్రకటన గ్రంథము",
];

/// Hindi catalog.
pub static HINDI: BookCatalog = [
    "उत्पत्ति",
    "निर्गमन",
    "लैव्यव्यवस्था",
    "गिनती",
    "व्यवस्थाविवरण",
    "यहोशू",
    "न्यायियों",
    "रूत",
    "1 शमूएल",
    "2 शमूएल",
    "1 राजाओं",
    "2 राजाओं",
    "1 इतिहास",
    "2 इतिहास",
    "एज्रा",
    "नहेम्याह",
    "एस्तेर",
    "अय्यूब",
    "भजन संहिता",
    "नीतिवचन",
    "सभोपदेशक",
    "श्रेष्ठगीत",
    "यशायाह",
    "यिर्मयाह",
    "विलापगीत",
    "यहेजकेल",
    "दानिय्येल",
    "होशे",
    "योएल",
    "आमोस",
    "ओबद्याह",
    "योना",
    "मीका",
    "नहूम",
    "हबक्कूक",
    "सपन्याह",
    "हाग्गै",
    "जकर्याह",
    "मलाकी",
    "मत्ती",
    "मरकुस",
    "लूका",
    "यूहन्ना",
    "प्रेरितों के काम",
    "रोमियों",
    "1 कुरिन्थियों",
    "2 कुरिन्थियों",
    "गलातियों",
    "इफिसियों",
    "फिलिप्पियों",
    "कुलुस्सियों",
    "1 थिस्सलुनीकियों",
    "2 थिस्सलुनीकियों",
    "1 तीमुथियुस",
    "2 तीमुथियुस",
    "तीतुस",
    "फिलेमोन",
    "इब्रानियों",
    "याकूब",
    "1 पतरस",
    "2 पतरस",
    "1 यूहन्ना",
    "2 यूहन्ना",
    "3 यूहन्ना",
    "यहूदा",
    "प्रकाशितवाक्य",
];

/// Malayalam catalog.
pub static MALAYALAM: BookCatalog = [
    "ഉല്പത്തി",
    "പുറപ്പാട്",
    "ലേവ്യപുസ്തകം",
    "സംഖ്യാപുസ്തകം",
    "ആവർത്തനം",
    "യോശുവ",
    "ന്യായാധിപന്മാർ",
    "രൂത്ത്",
    "1 ശമൂവേൽ",
    "2 ശമൂവേൽ",
    "1 രാജാക്കന്മാർ",
    "2 രാജാക്കന്മാർ",
    "1 ദിനവൃത്താന്തം",
    "2 ദിനവൃത്താന്തം",
    "എസ്രാ",
    "നെഹെമ്യാവ്",
    "എസ്ഥേർ",
    "ഇയ്യോബ്",
    "സങ്കീർത്തനങ്ങൾ",
    "സദൃശ്യവാക്യങ്ങൾ",
    "സഭാപ്രസംഗി",
    "ഉത്തമഗീതം",
    "യെശയ്യാവ്",
    "യിരെമ്യാവ്",
    "വിലാപങ്ങൾ",
    "യെഹെസ്കേൽ",
    "ദാനീയേൽ",
    "ഹോശേയ",
    "യോവേൽ",
    "ആമോസ്",
    "ഓബദ്യാവ്",
    "യോനാ",
    "മീഖാ",
    "നഹൂം",
    "ഹബക്കൂക്ക്",
    "സെഫന്യാവ്",
    "ഹഗ്ഗായി",
    "സെഖര്യാവ്",
    "മലാഖി",
    "മത്തായി",
    "മർക്കൊസ്",
    "ലൂക്കൊസ്",
    "യോഹന്നാൻ",
    "അപ്പൊസ്തലന്മാരുടെ പ്രവൃത്തികൾ",
    "റോമർ",
    "1 കൊരിന്ത്യർ",
    "2 കൊരിന്ത്യർ",
    "ഗലാത്യർ",
    "എഫെസ്യർ",
    "ഫിലിപ്പിയർ",
    "കൊലൊസ്സ്യർ",
    "1 തെസ്സലൊനീക്യർ",
    "2 തെസ്സലൊനീക്യർ",
    "1 തിമൊഥെയൊസ്",
    "2 തിമൊഥെയൊസ്",
    "തീത്തൊസ്",
    "ഫിലേമോൻ",
    "എബ്രായർ",
    "യാക്കോബ്",
    "1 പത്രൊസ്",
    "2 പത്രൊസ്",
    "1 യോഹന്നാൻ",
    "2 യോഹന്നാൻ",
    "3 യോഹന്നാൻ",
    "യൂദാ",
    "വെളിപ്പാട്",
];

/// Marathi catalog.
pub static MARATHI: BookCatalog = [
    "उत्पत्ति",
    "निर्गम",
    "लेवीय",
    "गणना",
    "अनुवाद",
    "यहोशवा",
    "शास्ते",
    "रूथ",
    "1 शमुवेल",
    "2 शमुवेल",
    "1 राजे",
    "2 राजे",
    "1 इतिहास",
    "2 इतिहास",
    "एज्रा",
    "नहेम्या",
    "एस्तेर",
    "ईयोब",
    "स्तोत्रसंहिता",
    "नीतिसूत्रे",
    "उपदेशक",
    "गीतरत्न",
    "यशया",
    "यिर्मया",
    "विलापगीत",
    "यहेज्केल",
    "दानीएल",
    "होशेय",
    "योएल",
    "आमोस",
    "ओबद्या",
    "योना",
    "मीखा",
    "नहूम",
    "हबक्कूक",
    "सफन्या",
    "हाग्गय",
    "जखऱ्या",
    "मलाखी",
    "मत्तय",
    "मार्क",
    "लूक",
    "योहान",
    "प्रेषितांची कृत्ये",
    "रोमकरांस",
    "1 करिंथकरांस",
    "2 करिंथकरांस",
    "गलतीकरांस",
    "इफिसकरांस",
    "फिलिप्पैकरांस",
    "कलस्सैकरांस",
    "1 थेस्सलनीकाकरांस",
    "2 थेस्सलनीकाकरांस",
    "1 तीमथ्याला",
    "2 तीमथ्याला",
    "तीताला",
    "फिलेमोनाला",
    "इब्री लोकांस",
    "याकोब",
    "1 पेत्र",
    "2 पेत्र",
    "1 योहान",
    "2 योहान",
    "3 योहान",
    "यहूदा",
    "प्रकटीकरण",
];

/// Bengali catalog.
pub static BENGALI: BookCatalog = [
    "আদিপুস্তক",
    "যাত্রাপুস্তক",
    "লেবীয় পুস্তক",
    "গণনা পুস্তক",
    "দ্বিতীয় বিবরণ",
    "যিহোশূয়",
    "বিচারকর্তৃগণ",
    "রূত",
    "1 শমূয়েল",
    "2 শমূয়েল",
    "1 রাজাবলি",
    "2 রাজাবলি",
    "1 বংশাবলি",
    "2 বংশাবলি",
    "ইষ্রা",
    "নহিমিয়",
    "ইষ্টের",
    "ইয়োব",
    "গীতসংহিতা",
    "হিতোপদেশ",
    "উপদেশক",
    "পরমগীত",
    "যিশাইয়",
    "যিরমিয়",
    "বিলাপ",
    "যিহিষ্কেল",
    "দানিয়েল",
    "হোশেয়",
    "যোয়েল",
    "আমোষ",
    "ওবদিয়",
    "যোনা",
    "মীখা",
    "নহূম",
    "হবক্কূক",
    "সফনিয়",
    "হগয়",
    "সখরিয়",
    "মালাখি",
    "মথি",
    "মার্ক",
    "লূক",
    "যোহন",
    "প্রেরিত",
    "রোমীয়",
    "1 করিন্থীয়",
    "2 করিন্থীয়",
    "গালাতীয়",
    "ইফিষীয়",
    "ফিলিপীয়",
    "কলসীয়",
    "1 থিষলনীকীয়",
    "2 থিষলনীকীয়",
    "1 তীমথিয়",
    "2 তীমথিয়",
    "তীত",
    "ফিলীমন",
    "ইব্রীয়",
    "যাকোব",
    "1 পিতর",
    "2 পিতর",
    "1 যোহন",
    "2 যোহন",
    "3 যোহন",
    "যিহূদা",
    "প্রকাশিত বাক্য",
];

/// Gujarati catalog.
pub static GUJARATI: BookCatalog = [
    "ઉત્પત્તિ",
    "નિર્ગમન",
    "લેવીય",
    "ગણના",
    "પુનર્નિયમ",
    "યહોશુઆ",
    "ન્યાયાધીશો",
    "રૂથ",
    "1 શમુએલ",
    "2 શમુએલ",
    "1 રાજાઓ",
    "2 રાજાઓ",
    "1 કાળવૃત્તાંત",
    "2 કાળવૃત્તાંત",
    "એઝરા",
    "નહેમ્યા",
    "એસ્તેર",
    "અયૂબ",
    "ગીતશાસ્ત્ર",
    "નીતિવચનો",
    "સભાશિક્ષક",
    "ગીતોનું ગીત",
    "યશાયા",
    "યર્મિયા",
    "વિલાપગીત",
    "હઝકિયેલ",
    "દાનિયેલ",
    "હોશિયા",
    "યોએલ",
    "આમોસ",
    "ઓબાદ્યા",
    "યૂના",
    "મીખાહ",
    "નાહૂમ",
    "હબાકુક",
    "સફાન્યા",
    "હાગ્ગાય",
    "ઝખાર્યા",
    "માલાખી",
    "માથ્થી",
    "માર્ક",
    "લૂક",
    "યોહાન",
    "પ્રેરિતોનાં કૃત્યો",
    "રોમનો",
    "1 કરિંથીઓ",
    "2 કરિંથીઓ",
    "ગલાતીઓ",
    "એફેસીઓ",
    "ફિલિપીઓ",
    "કલોસ્સીઓ",
    "1 થેસ્સાલોનિકીઓ",
    "2 થેસ્સાલોનિકીઓ",
    "1 તિમોથી",
    "2 તિમોથી",
    "તિતસ",
    "ફિલેમોન",
    "હિબ્રૂઓ",
    "યાકૂબ",
    "1 પિતર",
    "2 પિતર",
    "1 યોહાન",
    "2 યોહાન",
    "3 યોહાન",
    "યહૂદા",
    "પ્રકટીકરણ",
];

/// Punjabi catalog.
pub static PUNJABI: BookCatalog = [
    "ਉਤਪਤ",
    "ਕੂਚ",
    "ਲੇਵੀਆਂ",
    "ਗਿਣਤੀ",
    "ਬਿਵਸਥਾ ਸਾਰ",
    "ਯਹੋਸ਼ੁਆ",
    "ਨਿਆਂਈਆਂ",
    "ਰੂਥ",
    "1 ਸਮੂਏਲ",
    "2 ਸਮੂਏਲ",
    "1 ਰਾਜਿਆਂ",
    "2 ਰਾਜਿਆਂ",
    "1 ਇਤਹਾਸ",
    "2 ਇਤਹਾਸ",
    "ਅਜ਼ਰਾ",
    "ਨਹਮਯਾਹ",
    "ਅਸਤਰ",
    "ਅੱਯੂਬ",
    "ਜ਼ਬੂਰ",
    "ਕਹਾਉਤਾਂ",
    "ਉਪਦੇਸ਼ਕ",
    "ਸਰੇਸ਼ਟ ਗੀਤ",
    "ਯਸਾਯਾਹ",
    "ਯਿਰਮਿਯਾਹ",
    "ਵਿਰਲਾਪ",
    "ਹਿਜ਼ਕੀਏਲ",
    "ਦਾਨੀਏਲ",
    "ਹੋਸ਼ੇਆ",
    "ਯੋਏਲ",
    "ਆਮੋਸ",
    "ਓਬਦਯਾਹ",
    "ਯੂਨਾਹ",
    "ਮੀਕਾਹ",
    "ਨਹੂਮ",
    "ਹਬੱਕੂਕ",
    "ਸਫ਼ਨਯਾਹ",
    "ਹੱਜਈ",
    "ਜ਼ਕਰਯਾਹ",
    "ਮਲਾਕੀ",
    "ਮੱਤੀ",
    "ਮਰਕੁਸ",
    "ਲੂਕਾ",
    "ਯੂਹੰਨਾ",
    "ਰਸੂਲਾਂ ਦੇ ਕਰਤੱਬ",
    "ਰੋਮੀਆਂ",
    "1 ਕੁਰਿੰਥੀਆਂ",
    "2 ਕੁਰਿੰਥੀਆਂ",
    "ਗਲਾਤੀਆਂ",
    "ਅਫ਼ਸੀਆਂ",
    "ਫ਼ਿਲਿੱਪੀਆਂ",
    "ਕੁਲੁੱਸੀਆਂ",
    "1 ਥੱਸਲੁਨੀਕੀਆਂ",
    "2 ਥੱਸਲੁਨੀਕੀਆਂ",
    "1 ਤਿਮੋਥਿਉਸ",
    "2 ਤਿਮੋਥਿਉਸ",
    "ਤੀਤੁਸ",
    "ਫ਼ਿਲੇਮੋਨ",
    "ਇਬਰਾਨੀਆਂ",
    "ਯਾਕੂਬ",
    "1 ਪਤਰਸ",
    "2 ਪਤਰਸ",
    "1 ਯੂਹੰਨਾ",
    "2 ਯੂਹੰਨਾ",
    "3 ਯੂਹੰਨਾ",
    "ਯਹੂਦਾ",
    "ਪਰਕਾਸ਼ ਦੀ ਪੋਥੀ",
];

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_round_trip() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), Some(*lang));
        }
        assert_eq!(Language::from_code(" TA "), Some(Language::Tamil));
        assert_eq!(Language::from_code("xx"), None);
    }

    #[test]
    fn catalog_names_are_unique_and_nonblank() {
        for lang in Language::all() {
            let catalog = lang.catalog();
            let unique: HashSet<_> = catalog.iter().collect();
            assert_eq!(unique.len(), BOOK_COUNT, "duplicate book name in {}", lang.name());
            assert!(catalog.iter().all(|b| !b.trim().is_empty() && b.trim() == *b));
        }
    }

    #[test]
    fn numbered_books_line_up_across_languages() {
        // 1 Samuel, 1 Corinthians and 3 John sit at the same slots everywhere.
        for lang in Language::all() {
            let catalog = lang.catalog();
            assert!(catalog[8].starts_with("1 "), "{}", lang.name());
            assert!(catalog[45].starts_with("1 "), "{}", lang.name());
            assert!(catalog[63].starts_with("3 "), "{}", lang.name());
        }
    }

    #[test]
    fn exact_name_match_only() {
        assert_eq!(book_index(&ENGLISH, "  John "), Some(BookIndex(42)));
        assert_eq!(book_index(&ENGLISH, "john"), None);
        assert_eq!(book_index(&ENGLISH, "Jn"), None);
        assert_eq!(book_index(&ENGLISH, ""), None);
        assert_eq!(book_index(&TAMIL, "யோவான்"), Some(BookIndex(42)));
    }

    #[test]
    fn document_paths_follow_code() {
        assert_eq!(Language::Kannada.document_path(), "bibles/kn.json");
    }

    #[test]
    fn book_name_bounds() {
        assert_eq!(book_name(&ENGLISH, BookIndex(0)), Some("Genesis"));
        assert_eq!(book_name(&ENGLISH, BookIndex(66)), None);
    }
}
