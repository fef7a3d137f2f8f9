//! Static zodiac reference data: the twelve signs, their element and quality
//! groupings, and the localized descriptive table.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{Language, UnknownName};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Quality {
    Cardinal,
    Fixed,
    Mutable,
}

impl ZodiacSign {
    /// All twelve signs in zodiac order, starting at the vernal equinox.
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Position in zodiac order (aries = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Canonical lowercase identifier, used in prompts and JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "aries",
            ZodiacSign::Taurus => "taurus",
            ZodiacSign::Gemini => "gemini",
            ZodiacSign::Cancer => "cancer",
            ZodiacSign::Leo => "leo",
            ZodiacSign::Virgo => "virgo",
            ZodiacSign::Libra => "libra",
            ZodiacSign::Scorpio => "scorpio",
            ZodiacSign::Sagittarius => "sagittarius",
            ZodiacSign::Capricorn => "capricorn",
            ZodiacSign::Aquarius => "aquarius",
            ZodiacSign::Pisces => "pisces",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "♈",
            ZodiacSign::Taurus => "♉",
            ZodiacSign::Gemini => "♊",
            ZodiacSign::Cancer => "♋",
            ZodiacSign::Leo => "♌",
            ZodiacSign::Virgo => "♍",
            ZodiacSign::Libra => "♎",
            ZodiacSign::Scorpio => "♏",
            ZodiacSign::Sagittarius => "♐",
            ZodiacSign::Capricorn => "♑",
            ZodiacSign::Aquarius => "♒",
            ZodiacSign::Pisces => "♓",
        }
    }

    pub fn element(self) -> Element {
        match self {
            ZodiacSign::Aries | ZodiacSign::Leo | ZodiacSign::Sagittarius => Element::Fire,
            ZodiacSign::Taurus | ZodiacSign::Virgo | ZodiacSign::Capricorn => Element::Earth,
            ZodiacSign::Gemini | ZodiacSign::Libra | ZodiacSign::Aquarius => Element::Air,
            ZodiacSign::Cancer | ZodiacSign::Scorpio | ZodiacSign::Pisces => Element::Water,
        }
    }

    pub fn quality(self) -> Quality {
        match self {
            ZodiacSign::Aries | ZodiacSign::Cancer | ZodiacSign::Libra | ZodiacSign::Capricorn => {
                Quality::Cardinal
            }
            ZodiacSign::Taurus | ZodiacSign::Leo | ZodiacSign::Scorpio | ZodiacSign::Aquarius => {
                Quality::Fixed
            }
            ZodiacSign::Gemini | ZodiacSign::Virgo | ZodiacSign::Sagittarius | ZodiacSign::Pisces => {
                Quality::Mutable
            }
        }
    }

    /// Traditional ruling body. Kept in English for every locale.
    pub fn ruling_body(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Mars",
            ZodiacSign::Taurus => "Venus",
            ZodiacSign::Gemini => "Mercury",
            ZodiacSign::Cancer => "Moon",
            ZodiacSign::Leo => "Sun",
            ZodiacSign::Virgo => "Mercury",
            ZodiacSign::Libra => "Venus",
            ZodiacSign::Scorpio => "Pluto",
            ZodiacSign::Sagittarius => "Jupiter",
            ZodiacSign::Capricorn => "Saturn",
            ZodiacSign::Aquarius => "Uranus",
            ZodiacSign::Pisces => "Neptune",
        }
    }

    pub fn lucky_numbers(self) -> &'static [u8] {
        match self {
            ZodiacSign::Aries => &[1, 8, 17],
            ZodiacSign::Taurus => &[2, 6, 9, 12],
            ZodiacSign::Gemini => &[5, 7, 14, 23],
            ZodiacSign::Cancer => &[2, 3, 15, 24],
            ZodiacSign::Leo => &[1, 3, 10, 19],
            ZodiacSign::Virgo => &[5, 14, 15, 23, 32],
            ZodiacSign::Libra => &[4, 6, 13, 15, 24],
            ZodiacSign::Scorpio => &[8, 11, 18, 22],
            ZodiacSign::Sagittarius => &[3, 7, 9, 12, 21],
            ZodiacSign::Capricorn => &[4, 8, 13, 22],
            ZodiacSign::Aquarius => &[4, 8, 13, 22, 31],
            ZodiacSign::Pisces => &[3, 9, 12, 15, 18, 24],
        }
    }

    /// Thai names a model may answer with. The first is the usual short form.
    pub fn thai_names(self) -> &'static [&'static str] {
        match self {
            ZodiacSign::Aries => &["เมษ"],
            ZodiacSign::Taurus => &["พฤษภ"],
            ZodiacSign::Gemini => &["เมถุน"],
            ZodiacSign::Cancer => &["กรกฎ"],
            ZodiacSign::Leo => &["สิงห์"],
            ZodiacSign::Virgo => &["กันย์", "กันยา"],
            ZodiacSign::Libra => &["ตุลย์", "ตุลา"],
            ZodiacSign::Scorpio => &["พิจิก"],
            ZodiacSign::Sagittarius => &["ธนู"],
            ZodiacSign::Capricorn => &["มังกร"],
            ZodiacSign::Aquarius => &["กุมภ์"],
            ZodiacSign::Pisces => &["มีน"],
        }
    }

    /// Tropical sun sign for a calendar date.
    pub fn for_date(date: NaiveDate) -> ZodiacSign {
        // First day of the sign that begins in each month, January first.
        const STARTS: [u32; 12] = [20, 19, 21, 20, 21, 21, 23, 23, 23, 23, 22, 22];

        let month = date.month() as usize;
        let index = if date.day() >= STARTS[month - 1] {
            (month + 9) % 12
        } else {
            (month + 8) % 12
        };
        ZodiacSign::ALL[index]
    }

    pub fn profile(self, lang: Language) -> SignProfile {
        let text = match lang {
            Language::En => &TABLE_EN[self.index()],
            Language::Th => &TABLE_TH[self.index()],
        };
        SignProfile {
            sign: self,
            symbol: self.symbol(),
            element: self.element(),
            quality: self.quality(),
            ruling_body: self.ruling_body(),
            date_range: text.date_range,
            strengths: text.strengths,
            weaknesses: text.weaknesses,
            lucky_numbers: self.lucky_numbers(),
            lucky_colors: text.lucky_colors,
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ZodiacSign {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let wanted = trimmed.to_lowercase();
        let thai = trimmed.strip_prefix("ราศี").unwrap_or(trimmed).trim();
        ZodiacSign::ALL
            .into_iter()
            .find(|sign| sign.as_str() == wanted || sign.thai_names().contains(&thai))
            .ok_or_else(|| UnknownName::new("zodiac sign", s))
    }
}

impl TryFrom<String> for ZodiacSign {
    type Error = UnknownName;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Element {
    pub const ALL: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];

    pub fn as_str(self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Earth => "earth",
            Element::Air => "air",
            Element::Water => "water",
        }
    }

    pub fn signs(self) -> Vec<ZodiacSign> {
        ZodiacSign::ALL
            .into_iter()
            .filter(|sign| sign.element() == self)
            .collect()
    }

    pub fn thai_name(self) -> &'static str {
        match self {
            Element::Fire => "ไฟ",
            Element::Earth => "ดิน",
            Element::Air => "ลม",
            Element::Water => "น้ำ",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Element {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let wanted = trimmed.to_lowercase();
        let thai = trimmed.strip_prefix("ธาตุ").unwrap_or(trimmed).trim();
        Element::ALL
            .into_iter()
            .find(|e| e.as_str() == wanted || e.thai_name() == thai)
            .ok_or_else(|| UnknownName::new("element", s))
    }
}

impl TryFrom<String> for Element {
    type Error = UnknownName;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Quality {
    pub const ALL: [Quality; 3] = [Quality::Cardinal, Quality::Fixed, Quality::Mutable];

    pub fn as_str(self) -> &'static str {
        match self {
            Quality::Cardinal => "cardinal",
            Quality::Fixed => "fixed",
            Quality::Mutable => "mutable",
        }
    }

    pub fn signs(self) -> Vec<ZodiacSign> {
        ZodiacSign::ALL
            .into_iter()
            .filter(|sign| sign.quality() == self)
            .collect()
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Quality {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Quality::ALL
            .into_iter()
            .find(|q| q.as_str() == wanted)
            .ok_or_else(|| UnknownName::new("quality", s))
    }
}

impl TryFrom<String> for Quality {
    type Error = UnknownName;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One sign's descriptive entry, resolved for a locale.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignProfile {
    #[serde(rename = "name")]
    pub sign: ZodiacSign,
    pub symbol: &'static str,
    pub element: Element,
    pub quality: Quality,
    #[serde(rename = "rulingPlanet")]
    pub ruling_body: &'static str,
    pub date_range: &'static str,
    pub strengths: &'static [&'static str],
    pub weaknesses: &'static [&'static str],
    pub lucky_numbers: &'static [u8],
    pub lucky_colors: &'static [&'static str],
}

/// The full table for a locale, in zodiac order.
pub fn profiles(lang: Language) -> Vec<SignProfile> {
    ZodiacSign::ALL.into_iter().map(|s| s.profile(lang)).collect()
}

struct LocalizedText {
    date_range: &'static str,
    strengths: &'static [&'static str],
    weaknesses: &'static [&'static str],
    lucky_colors: &'static [&'static str],
}

const TABLE_EN: [LocalizedText; 12] = [
    LocalizedText {
        date_range: "March 21 - April 19",
        strengths: &["Courageous", "Determined", "Confident", "Enthusiastic", "Optimistic", "Honest", "Passionate"],
        weaknesses: &["Impatient", "Moody", "Short-tempered", "Impulsive", "Aggressive"],
        lucky_colors: &["Red", "Orange"],
    },
    LocalizedText {
        date_range: "April 20 - May 20",
        strengths: &["Reliable", "Patient", "Practical", "Devoted", "Responsible", "Stable"],
        weaknesses: &["Stubborn", "Possessive", "Uncompromising"],
        lucky_colors: &["Green", "Pink"],
    },
    LocalizedText {
        date_range: "May 21 - June 20",
        strengths: &["Gentle", "Affectionate", "Curious", "Adaptable", "Ability to learn quickly", "Outgoing"],
        weaknesses: &["Nervous", "Inconsistent", "Indecisive"],
        lucky_colors: &["Yellow", "Green"],
    },
    LocalizedText {
        date_range: "June 21 - July 22",
        strengths: &["Tenacious", "Loyal", "Emotional", "Sympathetic", "Persuasive"],
        weaknesses: &["Moody", "Pessimistic", "Suspicious", "Manipulative", "Insecure"],
        lucky_colors: &["White", "Silver"],
    },
    LocalizedText {
        date_range: "July 23 - August 22",
        strengths: &["Creative", "Passionate", "Generous", "Warm-hearted", "Cheerful", "Humorous"],
        weaknesses: &["Arrogant", "Stubborn", "Self-centered", "Lazy", "Inflexible"],
        lucky_colors: &["Gold", "Orange"],
    },
    LocalizedText {
        date_range: "August 23 - September 22",
        strengths: &["Loyal", "Analytical", "Kind", "Hardworking", "Practical"],
        weaknesses: &["Shyness", "Worry", "Overly critical of self and others", "All work and no play"],
        lucky_colors: &["Green", "White", "Yellow"],
    },
    LocalizedText {
        date_range: "September 23 - October 22",
        strengths: &["Cooperative", "Diplomatic", "Gracious", "Fair-minded", "Social"],
        weaknesses: &["Indecisive", "Avoids confrontations", "Will carry a grudge", "Self-pity"],
        lucky_colors: &["Pink", "Green"],
    },
    LocalizedText {
        date_range: "October 23 - November 21",
        strengths: &["Resourceful", "Brave", "Passionate", "Stubborn", "A true friend"],
        weaknesses: &["Distrusting", "Jealous", "Secretive", "Violent"],
        lucky_colors: &["Dark Red", "Maroon"],
    },
    LocalizedText {
        date_range: "November 22 - December 21",
        strengths: &["Generous", "Idealistic", "Great sense of humor", "Open-minded"],
        weaknesses: &["Promises more than can deliver", "Very impatient", "Will say anything no matter how undiplomatic"],
        lucky_colors: &["Purple", "Turquoise"],
    },
    LocalizedText {
        date_range: "December 22 - January 19",
        strengths: &["Responsible", "Disciplined", "Self-control", "Good managers"],
        weaknesses: &["Know-it-all", "Unforgiving", "Condescending", "Expect the worst"],
        lucky_colors: &["Brown", "Black", "Dark Green"],
    },
    LocalizedText {
        date_range: "January 20 - February 18",
        strengths: &["Progressive", "Original", "Independent", "Humanitarian", "Intellectual"],
        weaknesses: &["Runs from emotional expression", "Temperamental", "Uncompromising", "Aloof"],
        lucky_colors: &["Blue", "Green"],
    },
    LocalizedText {
        date_range: "February 19 - March 20",
        strengths: &["Compassionate", "Artistic", "Intuitive", "Gentle", "Wise", "Musical"],
        weaknesses: &["Fearful", "Overly trusting", "Sad", "Desire to escape reality", "Can be a victim or a martyr"],
        lucky_colors: &["Sea Green", "Purple"],
    },
];

const TABLE_TH: [LocalizedText; 12] = [
    LocalizedText {
        date_range: "21 มีนาคม - 19 เมษายน",
        strengths: &["กล้าหาญ", "มุมานะ", "มั่นใจ", "กระตือรือร้น", "มองโลกในแง่ดี", "ซื่อสัตย์", "หลงใหล"],
        weaknesses: &["ขาดความอดทน", "อารมณ์แปรปรวน", "ฉุนเฉียว", "วู่วาม", "ดุร้าย"],
        lucky_colors: &["สีแดง", "สีส้ม"],
    },
    LocalizedText {
        date_range: "20 เมษายน - 20 พฤษภาคม",
        strengths: &["น่าเชื่อถือ", "อดทน", "สมเหตุสมผล", "ซื่อตรง", "รับผิดชอบ", "มั่นคง"],
        weaknesses: &["ดื้อรั้น", "ยึดติด", "ไม่ยอมประนีประนอม"],
        lucky_colors: &["สีเขียว", "สีชมพู"],
    },
    LocalizedText {
        date_range: "21 พฤษภาคม - 20 มิถุนายน",
        strengths: &["สุภาพ", "รักใคร่", "อยากรู้อยากเห็น", "ปรับตัวได้ง่าย", "เรียนรู้เร็ว", "สุงสิงกับสังคม"],
        weaknesses: &["กังวล", "ไม่สม่ำเสมอ", "ตัดสินใจยาก"],
        lucky_colors: &["สีเหลือง", "สีเขียว"],
    },
    LocalizedText {
        date_range: "21 มิถุนายน - 22 กรกฎาคม",
        strengths: &["เพียรพยายาม", "ซื่อสัตย์", "อ่อนโยน", "เข้าอกเข้าใจ", "มีเสน่ห์"],
        weaknesses: &["อารมณ์แปรปรวน", "มองโลกในแง่ร้าย", "หวาดระแวง", "ชอบบงการ", "ขาดความมั่นใจ"],
        lucky_colors: &["สีขาว", "สีเงิน"],
    },
    LocalizedText {
        date_range: "23 กรกฎาคม - 22 สิงหาคม",
        strengths: &["สร้างสรรค์", "หลงใหล", "ใจกว้าง", "อบอุ่น", "ร่าเริง", "ขบขัน"],
        weaknesses: &["ทรนง", "ดื้อรั้น", "เห็นแก่ตัว", "ขี้เกียจ", "ไม่ยืดหยุ่น"],
        lucky_colors: &["สีทอง", "สีส้ม"],
    },
    LocalizedText {
        date_range: "23 สิงหาคม - 22 กันยายน",
        strengths: &["ซื่อสัตย์", "วิเคราะห์ดี", "เมตตา", "ขยัน", "สมเหตุสมผล"],
        weaknesses: &["ขี้อาย", "กังวล", "วิจารณ์ตัวเองและคนอื่นมากเกินไป", "ทำงานหนักเกินไป"],
        lucky_colors: &["สีเขียว", "สีขาว", "สีเหลือง"],
    },
    LocalizedText {
        date_range: "23 กันยายน - 22 ตุลาคม",
        strengths: &["ร่วมมือ", "สุภาพ", "สุขุม", "เป็นธรรม", "สุงสิงกับสังคม"],
        weaknesses: &["ตัดสินใจยาก", "หลีกเลี่ยงการทะเลาะ", "จดจำความผิด", "เหงา"],
        lucky_colors: &["สีชมพู", "สีเขียว"],
    },
    LocalizedText {
        date_range: "23 ตุลาคม - 21 พฤศจิกายน",
        strengths: &["มีวิธีคิดดี", "กล้าหาญ", "หลงใหล", "ดื้อรั้น", "เป็นเพื่อนที่ดี"],
        weaknesses: &["ไม่ไว้วางใจ", "อิจฉา", "เก็บความลับ", "รุนแรง"],
        lucky_colors: &["สีแดงเข้ม", "สีแดงอมน้ำตาล"],
    },
    LocalizedText {
        date_range: "22 พฤศจิกายน - 21 ธันวาคม",
        strengths: &["ใจกว้าง", "มุ่งมั่น", "ขบขัน", "มีความคิดกว้าง"],
        weaknesses: &["ให้คำมั่นไว้มากกว่าที่จะทำได้", "ขาดความอดทนมาก", "พูดตรงๆ ไม่กลัวใคร"],
        lucky_colors: &["สีม่วง", "สีฟ้าอมเขียว"],
    },
    LocalizedText {
        date_range: "22 ธันวาคม - 19 มกราคม",
        strengths: &["รับผิดชอบ", "มีวินัย", "มีวินัยในตนเอง", "เป็นผู้นำที่ดี"],
        weaknesses: &["คิดว่าตัวเองรู้เรื่อง", "ไม่ยอมให้อภัย", "ดูถูกผู้อื่น", "คาดหวังสิ่งที่แย่ที่สุด"],
        lucky_colors: &["สีน้ำตาล", "สีดำ", "สีเขียวเข้ม"],
    },
    LocalizedText {
        date_range: "20 มกราคม - 18 กุมภาพันธ์",
        strengths: &["ก้าวหน้า", "มีความคิดสร้างสรรค์", "เป็นอิสระ", "มีมนุษยธรรม", "มีความคิด"],
        weaknesses: &["หลบเลี่ยงการแสดงความรู้สึก", "อารมณ์แปรปรวน", "ไม่ยอมประนีประนอม", "เย็นชา"],
        lucky_colors: &["สีฟ้า", "สีเขียว"],
    },
    LocalizedText {
        date_range: "19 กุมภาพันธ์ - 20 มีนาคม",
        strengths: &["เมตตา", "มีศิลปะ", "มีสัญชาตญาณ", "สุภาพ", "ฉลาด", "รักดนตรี"],
        weaknesses: &["กลัว", "ไว้วางใจง่ายเกินไป", "เศร้า", "อยากหนีจากความเป็นจริง", "อาจเป็นเหยื่อหรือผู้ยอมสละ"],
        lucky_colors: &["สีเขียวอมฟ้า", "สีม่วง"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elements_partition_signs_in_threes() {
        let mut seen = Vec::new();
        for element in Element::ALL {
            let signs = element.signs();
            assert_eq!(signs.len(), 3, "{element} should hold three signs");
            seen.extend(signs);
        }
        seen.sort();
        assert_eq!(seen, ZodiacSign::ALL.to_vec());
    }

    #[test]
    fn qualities_partition_signs_in_fours() {
        let mut seen = Vec::new();
        for quality in Quality::ALL {
            let signs = quality.signs();
            assert_eq!(signs.len(), 4, "{quality} should hold four signs");
            seen.extend(signs);
        }
        seen.sort();
        assert_eq!(seen, ZodiacSign::ALL.to_vec());
    }

    #[test]
    fn groupings_do_not_depend_on_locale() {
        let en = profiles(Language::En);
        let th = profiles(Language::Th);
        assert_eq!(en.len(), 12);
        assert_eq!(th.len(), 12);
        for (a, b) in en.iter().zip(&th) {
            assert_eq!(a.sign, b.sign);
            assert_eq!(a.element, b.element);
            assert_eq!(a.quality, b.quality);
            assert_eq!(a.lucky_numbers, b.lucky_numbers);
            assert_ne!(a.date_range, b.date_range);
        }
    }

    #[test]
    fn parses_identifiers_case_insensitively() {
        assert_eq!("Aries".parse::<ZodiacSign>().unwrap(), ZodiacSign::Aries);
        assert_eq!(" PISCES ".parse::<ZodiacSign>().unwrap(), ZodiacSign::Pisces);
        assert_eq!("Water".parse::<Element>().unwrap(), Element::Water);
        assert!("ophiuchus".parse::<ZodiacSign>().is_err());

        let sign: ZodiacSign = serde_json::from_str("\"Scorpio\"").unwrap();
        assert_eq!(sign, ZodiacSign::Scorpio);
        assert_eq!(serde_json::to_string(&sign).unwrap(), "\"scorpio\"");
    }

    #[test]
    fn parses_thai_names() {
        assert_eq!("เมษ".parse::<ZodiacSign>().unwrap(), ZodiacSign::Aries);
        assert_eq!("ราศีกันยา".parse::<ZodiacSign>().unwrap(), ZodiacSign::Virgo);
        assert_eq!(" ราศี ตุลย์ ".parse::<ZodiacSign>().unwrap(), ZodiacSign::Libra);
        assert_eq!("ธาตุดิน".parse::<Element>().unwrap(), Element::Earth);
        assert_eq!("น้ำ".parse::<Element>().unwrap(), Element::Water);
        assert!("ราศี".parse::<ZodiacSign>().is_err());

        // decoded names still serialize as identifiers
        let sign: ZodiacSign = serde_json::from_str("\"มังกร\"").unwrap();
        assert_eq!(serde_json::to_string(&sign).unwrap(), "\"capricorn\"");
    }

    #[test]
    fn sun_sign_boundaries() {
        let d = |m, day| NaiveDate::from_ymd_opt(2024, m, day).unwrap();
        assert_eq!(ZodiacSign::for_date(d(3, 20)), ZodiacSign::Pisces);
        assert_eq!(ZodiacSign::for_date(d(3, 21)), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::for_date(d(1, 19)), ZodiacSign::Capricorn);
        assert_eq!(ZodiacSign::for_date(d(1, 20)), ZodiacSign::Aquarius);
        assert_eq!(ZodiacSign::for_date(d(12, 21)), ZodiacSign::Sagittarius);
        assert_eq!(ZodiacSign::for_date(d(12, 22)), ZodiacSign::Capricorn);
        assert_eq!(ZodiacSign::for_date(d(7, 23)), ZodiacSign::Leo);
        assert_eq!(ZodiacSign::for_date(d(2, 29)), ZodiacSign::Pisces);
    }
}
