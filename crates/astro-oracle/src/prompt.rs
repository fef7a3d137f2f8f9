use astro_core::{clock_time, BirthRecord, Language, ZodiacSign};
use chrono::NaiveDate;
use serde_json::Value;

const CLOSING: &str =
    "IMPORTANT: Return ONLY valid JSON without any additional text or explanations.\n";

fn pick(lang: Language, en: &'static str, th: &'static str) -> &'static str {
    match lang {
        Language::En => en,
        Language::Th => th,
    }
}

fn language_instruction(lang: Language) -> &'static str {
    pick(
        lang,
        "Respond in English. All field values, text content, and descriptions should be in English.",
        "ตอบเป็นภาษาไทย ค่าทุกฟิลด์ เนื้อหาและคำอธิบายต้องเป็นภาษาไทยทั้งหมด",
    )
}

/// Sign, element and aspect fields are decoded as fixed identifiers.
fn identifier_note(lang: Language) -> &'static str {
    pick(
        lang,
        "Keep the values of \"sign\", \"sunSign\", \"moonSign\", \"risingSign\", \"element\" \
and aspect \"type\" as the lowercase English identifiers shown in the structure below.\n\n",
        "ค่าของฟิลด์ \"sign\", \"sunSign\", \"moonSign\", \"risingSign\", \"element\" \
และ \"type\" ของมุมดาว ให้ใช้ชื่อภาษาอังกฤษตัวพิมพ์เล็กตามโครงสร้างด้านล่างเท่านั้น\n\n",
    )
}

/// Role line, blank line, language instruction, blank line, "Input:".
fn preamble(out: &mut String, role: &str, lang: Language) {
    out.push('\n');
    out.push_str(role);
    out.push_str("\n\n");
    out.push_str(language_instruction(lang));
    out.push_str("\n\nInput:\n");
}

fn guidelines(out: &mut String, lines: &[&str]) {
    out.push_str("\nGuidelines:\n");
    for line in lines {
        out.push_str("- ");
        out.push_str(line);
        out.push('\n');
    }
    out.push('\n');
    out.push_str(CLOSING);
}

fn describe_person(record: &BirthRecord) -> String {
    let mut s = format!(
        "{}, born {} at {} in {}",
        record.name,
        record.date,
        clock_time::format(&record.time),
        record.location
    );
    if let Some((lat, lon)) = record.coordinates() {
        s.push_str(&format!(" ({lat}, {lon})"));
    }
    s
}

/// The birth record as the model should echo it back, indented by `indent`.
fn birth_json(record: &BirthRecord, indent: usize) -> String {
    let pad = " ".repeat(indent);
    let mut fields = vec![
        ("name", Value::from(record.name.as_str())),
        ("date", Value::from(record.date.to_string())),
        ("time", Value::from(clock_time::format(&record.time))),
        ("location", Value::from(record.location.as_str())),
    ];
    if let Some((lat, lon)) = record.coordinates() {
        fields.push(("latitude", Value::from(lat)));
        fields.push(("longitude", Value::from(lon)));
    }
    let body: Vec<String> = fields
        .iter()
        .map(|(key, value)| format!("{pad}  \"{key}\": {value}"))
        .collect();
    format!("{{\n{}\n{pad}}}", body.join(",\n"))
}

/// Stable chart identifier derived from the birth moment.
pub fn chart_id(record: &BirthRecord) -> String {
    format!(
        "chart_{}_{}",
        record.date.format("%Y%m%d"),
        record.time.format("%H%M")
    )
}

pub fn reading_prompt(sign: ZodiacSign, date: NaiveDate, lang: Language) -> String {
    let mut out = String::with_capacity(2048);
    preamble(
        &mut out,
        "You are an expert astrologer providing daily horoscope insights. Generate a daily \
horoscope reading in JSON format for the given zodiac sign and date.",
        lang,
    );
    out.push_str(&format!("- Zodiac sign: {sign}\n- Date: {date}\n\n"));
    out.push_str(identifier_note(lang));

    out.push_str("Generate a JSON response with this exact structure:\n{\n");
    out.push_str(&format!("  \"sign\": \"{sign}\",\n"));
    out.push_str(&format!("  \"date\": \"{date}\",\n"));
    for field in ["overall", "love", "career", "health", "finances"] {
        out.push_str(&format!("  \"{field}\": (1-5 rating),\n"));
    }
    out.push_str(&format!(
        "  \"mood\": \"{}\",\n",
        pick(lang, "one-word mood description", "คำอธิบายอารมณ์สั้นๆ เป็นภาษาไทย")
    ));
    out.push_str(&format!(
        "  \"advice\": \"{}\",\n",
        pick(
            lang,
            "2-3 sentence personalized advice for today",
            "คำแนะนำส่วนตัว 2-3 ประโยคเป็นภาษาไทย"
        )
    ));
    out.push_str("  \"luckyNumber\": (1-31),\n");
    out.push_str(&format!(
        "  \"luckyColor\": \"{}\"\n}}\n",
        pick(lang, "a color name", "ชื่อสีเป็นภาษาไทย")
    ));

    guidelines(
        &mut out,
        &[
            "Provide authentic, personalized astrological insights",
            "Consider current planetary transits and aspects",
            "Keep advice practical and positive",
            "Ratings should be realistic (not all 5s)",
            "Make the mood reflective of the day's energy",
            "Align lucky elements with the zodiac sign's traditional associations",
            pick(
                lang,
                "Make advice culturally appropriate for English speakers",
                "ให้คำแนะนำเป็นภาษาไทยที่เข้าใจง่าย เหมาะกับคนไทย",
            ),
        ],
    );
    out
}

pub fn chart_prompt(record: &BirthRecord, lang: Language) -> String {
    let mut out = String::with_capacity(3072);
    preamble(
        &mut out,
        "You are an expert Vedic and Western astrologer. Generate a comprehensive birth chart \
analysis in JSON format for the given birth data.",
        lang,
    );
    out.push_str(&format!("- Name: {}\n", record.name));
    out.push_str(&format!("- Birth Date: {}\n", record.date));
    out.push_str(&format!("- Birth Time: {}\n", clock_time::format(&record.time)));
    out.push_str(&format!("- Birth Location: {}\n", record.location));
    if let Some((lat, lon)) = record.coordinates() {
        out.push_str(&format!("- Coordinates: {lat}, {lon}\n"));
    }
    out.push('\n');
    out.push_str(identifier_note(lang));

    out.push_str("Generate a JSON response with this exact structure:\n{\n");
    out.push_str(&format!("  \"id\": \"{}\",\n", chart_id(record)));
    out.push_str(&format!("  \"birthData\": {},\n", birth_json(record, 2)));
    out.push_str(
        "  \"sunSign\": \"{sun_sign_lowercase}\",
  \"moonSign\": \"{moon_sign_lowercase}\",
  \"risingSign\": \"{rising_sign_lowercase}\",
  \"planets\": [
    {
      \"name\": \"Sun|Moon|Mercury|Venus|Mars|Jupiter|Saturn|Uranus|Neptune|Pluto\",
      \"sign\": \"{zodiac_sign_lowercase}\",
      \"degree\": (0-29),
      \"element\": \"fire|earth|air|water\",
      \"retrograde\": (true/false)
    }
  ],
  \"houses\": [
    {
      \"number\": (1-12),
      \"sign\": \"{zodiac_sign_lowercase}\",
      \"cusp\": (0-29)
    }
  ],
  \"aspects\": [
    {
      \"planet1\": \"{planet_name}\",
      \"planet2\": \"{planet_name}\",
      \"type\": \"conjunction|opposition|trine|square|sextile\",
      \"angle\": (0|60|90|120|180),
      \"orb\": (0-10)
    }
  ]
}
",
    );

    guidelines(
        &mut out,
        &[
            "Calculate accurate planetary positions for the given date/time/location",
            "Include all major planets plus Ascendant",
            "Consider both tropical and sidereal calculations",
            "Provide accurate house placements",
            "Include major aspects only (conjunction, opposition, trine, square, sextile)",
            "Degrees should be precise (0-29)",
            "At least 5 planets and 3 aspects should be included",
            pick(
                lang,
                "Consider the specific geographic coordinates and time zone",
                "คำนวณตำแหน่งดาวตามพิกัดที่ระบุ คำนึงถึงเขตเวลาของประเทศไทย",
            ),
        ],
    );
    out
}

pub fn compatibility_prompt(a: &BirthRecord, b: &BirthRecord, lang: Language) -> String {
    let mut out = String::with_capacity(3072);
    preamble(
        &mut out,
        "You are an expert relationship astrologer specializing in synastry and compatibility \
analysis. Generate a comprehensive compatibility reading in JSON format for two individuals.",
        lang,
    );
    out.push_str(&format!("- Person A: {}\n", describe_person(a)));
    out.push_str(&format!("- Person B: {}\n\n", describe_person(b)));

    out.push_str("Generate a JSON response with this exact structure:\n{\n");
    out.push_str(&format!("  \"personA\": {},\n", birth_json(a, 2)));
    out.push_str(&format!("  \"personB\": {},\n", birth_json(b, 2)));
    for field in ["overall", "love", "communication", "trust", "values"] {
        out.push_str(&format!("  \"{field}\": (0-100),\n"));
    }
    out.push_str(&format!(
        "  \"description\": \"{}\",\n",
        pick(
            lang,
            "3-4 sentence overview of the relationship dynamics and potential",
            "ภาพรวมความสัมพันธ์ 3-4 ประโยคเป็นภาษาไทย"
        )
    ));
    out.push_str(&format!(
        "  \"advice\": [\n    \"{}\"\n  ],\n",
        pick(
            lang,
            "4-6 specific pieces of relationship advice",
            "คำแนะนำความสัมพันธ์ 4-6 ข้อเป็นภาษาไทย"
        )
    ));
    out.push_str(&format!(
        "  \"challenges\": [\n    \"{}\"\n  ]\n}}\n",
        pick(
            lang,
            "3-4 potential challenges to be aware of",
            "ความท้าทายที่อาจเกิดขึ้น 3-4 ข้อเป็นภาษาไทย"
        )
    ));

    guidelines(
        &mut out,
        &[
            "Analyze both Western and Vedic compatibility factors",
            "Consider Sun sign compatibility, Moon synastry, Venus-Mars aspects",
            "Provide realistic percentages (not all 90-100)",
            "Focus on constructive, actionable advice",
            "Be honest about challenges while maintaining positivity",
            "Include practical communication and growth suggestions",
            pick(
                lang,
                "Make advice culturally appropriate",
                "ให้คำแนะนำที่เหมาะกับวัฒนธรรมไทย",
            ),
        ],
    );
    out
}

pub fn calendar_prompt(date: NaiveDate, location: &str, lang: Language) -> String {
    let mut out = String::with_capacity(2048);
    preamble(
        &mut out,
        "You are an expert Vedic astrologer providing daily Panchang information. Generate \
accurate Panchang data in JSON format for the given date and location.",
        lang,
    );
    out.push_str(&format!("- Date: {date}\n- Location: {location}\n\n"));

    out.push_str("Generate a JSON response with this exact structure:\n{\n");
    out.push_str(&format!("  \"date\": \"{date}\",\n"));
    out.push_str("  \"sunrise\": \"HH:MM\",\n  \"sunset\": \"HH:MM\",\n");
    out.push_str(&format!(
        "  \"moonPhase\": \"{}\",\n",
        pick(
            lang,
            "New Moon|Waxing Crescent|First Quarter|Waxing Gibbous|Full Moon|Waning Gibbous|Last Quarter|Waning Crescent",
            "ดิจันทร์|ขึ้นมาใหม่|แรกถึงครึ่ง|ขึ้นแรง|เต็มดวง|แรงดับ|สุดท้ายถึงสามส่วน|ดับสุดท้าย"
        )
    ));
    for field in ["nakshatra", "tithi", "yoga", "karana"] {
        out.push_str(&format!("  \"{field}\": \"{{{field}_name}}\",\n"));
    }
    out.push_str(&format!(
        "  \"auspiciousPeriods\": [\n    {{\n      \"start\": \"HH:MM\",\n      \"end\": \"HH:MM\",\n      \"type\": \"{}\"\n    }}\n  ]\n}}\n",
        pick(
            lang,
            "Abhijit Muhurat|Rahu Kalam|Gulikai Kalam|Yamaganda|Amrit Kaal",
            "อภิจิตมุหูรัต|ราหูคาลัม|กุลิกายคาลัม|ยามคันดะ|อมฤตคาล"
        )
    ));

    guidelines(
        &mut out,
        &[
            "Calculate accurate sunrise/sunset times for the given location",
            "Determine correct lunar phase and nakshatra",
            "Identify the tithi (lunar day) and yoga",
            "Include important time periods (muhurats and inauspicious times)",
            "Provide local time zone accurate calculations",
            "Consider the specific geographic coordinates if provided",
            "Include at least 2-3 auspicious periods",
            pick(
                lang,
                "Use traditional Vedic calendar names",
                "ใช้ชื่อดาวและวันที่ตามปฏิทินจันทรคติไทย",
            ),
        ],
    );
    out
}

/// Fixed prompt used by the connectivity probe.
pub const PROBE_PROMPT: &str = r#"Generate a simple JSON object: {"test": true}"#;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn alice() -> BirthRecord {
        BirthRecord::new(
            "Alice",
            date(1990, 3, 21),
            NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            "Los Angeles, CA, USA",
        )
    }

    fn bob() -> BirthRecord {
        BirthRecord::new(
            "Bob",
            date(1992, 7, 15),
            NaiveTime::from_hms_opt(14, 45, 0).unwrap(),
            "Chicago, IL, USA",
        )
    }

    #[test]
    fn reading_prompt_embeds_input_and_language() {
        let prompt = reading_prompt(ZodiacSign::Aries, date(2024, 1, 15), Language::En);
        assert!(prompt.contains("\"aries\""));
        assert!(prompt.contains("\"2024-01-15\""));
        assert!(prompt.contains("Respond in English"));
        assert!(prompt.contains("\"luckyNumber\": (1-31)"));
        assert!(prompt.trim_end().ends_with("without any additional text or explanations."));
    }

    #[test]
    fn thai_prompts_swap_instruction_and_placeholders() {
        let prompt = reading_prompt(ZodiacSign::Leo, date(2024, 8, 1), Language::Th);
        assert!(prompt.contains("ตอบเป็นภาษาไทย"));
        assert!(prompt.contains("ชื่อสีเป็นภาษาไทย"));
        assert!(!prompt.contains("Respond in English"));
        // schema keys stay in English
        assert!(prompt.contains("\"luckyColor\""));
    }

    #[test]
    fn sign_prompts_pin_identifiers_to_english() {
        for lang in [Language::En, Language::Th] {
            let reading = reading_prompt(ZodiacSign::Leo, date(2024, 8, 1), lang);
            let chart = chart_prompt(&alice(), lang);
            for prompt in [reading, chart] {
                assert!(prompt.contains(identifier_note(lang)), "{lang:?}");
                assert!(prompt.contains("\"risingSign\""));
            }
        }
        assert!(identifier_note(Language::Th).contains("ภาษาอังกฤษ"));
    }

    #[test]
    fn builders_are_deterministic() {
        let lang = Language::En;
        assert_eq!(
            reading_prompt(ZodiacSign::Virgo, date(2024, 9, 1), lang),
            reading_prompt(ZodiacSign::Virgo, date(2024, 9, 1), lang)
        );
        assert_eq!(chart_prompt(&alice(), lang), chart_prompt(&alice(), lang));
        assert_eq!(
            compatibility_prompt(&alice(), &bob(), Language::Th),
            compatibility_prompt(&alice(), &bob(), Language::Th)
        );
        assert_eq!(
            calendar_prompt(date(2024, 1, 15), "New Delhi, India", lang),
            calendar_prompt(date(2024, 1, 15), "New Delhi, India", lang)
        );
    }

    #[test]
    fn chart_prompt_echoes_birth_data_and_stable_id() {
        let prompt = chart_prompt(&alice(), Language::En);
        assert_eq!(chart_id(&alice()), "chart_19900321_1030");
        assert!(prompt.contains("\"id\": \"chart_19900321_1030\""));
        assert!(prompt.contains("\"time\": \"10:30\""));
        assert!(prompt.contains("- Birth Location: Los Angeles, CA, USA"));
        assert!(!prompt.contains("Coordinates"));

        let located = alice().with_coordinates(34.05, -118.25);
        let prompt = chart_prompt(&located, Language::En);
        assert!(prompt.contains("- Coordinates: 34.05, -118.25"));
        assert!(prompt.contains("\"latitude\": 34.05,\n"));
        assert!(prompt.contains("\"longitude\": -118.25\n"));
    }

    #[test]
    fn echoed_birth_data_is_valid_json() {
        let tricky = BirthRecord::new(
            r#"Jo "JJ" O\Neil"#,
            date(1990, 3, 21),
            NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            "Zürich, \"CH\"",
        )
        .with_coordinates(47.37, 8.54);
        let echoed: BirthRecord = serde_json::from_str(&birth_json(&tricky, 2)).unwrap();
        assert_eq!(echoed, tricky);

        let plain: BirthRecord = serde_json::from_str(&birth_json(&alice(), 0)).unwrap();
        assert_eq!(plain, alice());
    }

    #[test]
    fn compatibility_prompt_describes_both_people() {
        let prompt = compatibility_prompt(&alice(), &bob(), Language::En);
        assert!(prompt.contains(
            "- Person A: Alice, born 1990-03-21 at 10:30 in Los Angeles, CA, USA"
        ));
        assert!(prompt.contains("- Person B: Bob, born 1992-07-15 at 14:45 in Chicago, IL, USA"));
        assert!(prompt.contains("\"personB\": {"));
        assert!(prompt.contains("\"values\": (0-100)"));
    }

    #[test]
    fn calendar_prompt_lists_lunar_terms() {
        let prompt = calendar_prompt(date(2024, 1, 15), "New Delhi, India", Language::En);
        assert!(prompt.contains("- Location: New Delhi, India"));
        assert!(prompt.contains("\"tithi\": \"{tithi_name}\""));
        assert!(prompt.contains("Abhijit Muhurat"));
    }
}
