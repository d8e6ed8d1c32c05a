//! Zodiac signs that personalise a reading.

use serde::{Deserialize, Serialize};

use crate::cards::Element;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
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

impl ZodiacSign {
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

    #[must_use]
    pub const fn element(self) -> Element {
        match self {
            ZodiacSign::Aries | ZodiacSign::Leo | ZodiacSign::Sagittarius => Element::Fire,
            ZodiacSign::Taurus | ZodiacSign::Virgo | ZodiacSign::Capricorn => Element::Earth,
            ZodiacSign::Gemini | ZodiacSign::Libra | ZodiacSign::Aquarius => Element::Air,
            ZodiacSign::Cancer | ZodiacSign::Scorpio | ZodiacSign::Pisces => Element::Water,
        }
    }

    #[must_use]
    pub const fn traits(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "bold, pioneering, passionate, direct",
            ZodiacSign::Taurus => "grounded, patient, sensual, determined",
            ZodiacSign::Gemini => "curious, adaptable, communicative, versatile",
            ZodiacSign::Cancer => "nurturing, intuitive, emotional, protective",
            ZodiacSign::Leo => "confident, creative, generous, charismatic",
            ZodiacSign::Virgo => "analytical, practical, detail-oriented, helpful",
            ZodiacSign::Libra => "diplomatic, harmonious, social, balanced",
            ZodiacSign::Scorpio => "intense, transformative, passionate, perceptive",
            ZodiacSign::Sagittarius => "adventurous, philosophical, optimistic, free-spirited",
            ZodiacSign::Capricorn => "ambitious, disciplined, responsible, pragmatic",
            ZodiacSign::Aquarius => "innovative, independent, humanitarian, unconventional",
            ZodiacSign::Pisces => "empathetic, imaginative, spiritual, compassionate",
        }
    }

    /// Tropical date range, e.g. `"Mar 21 - Apr 19"`.
    #[must_use]
    pub const fn dates(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Mar 21 - Apr 19",
            ZodiacSign::Taurus => "Apr 20 - May 20",
            ZodiacSign::Gemini => "May 21 - Jun 20",
            ZodiacSign::Cancer => "Jun 21 - Jul 22",
            ZodiacSign::Leo => "Jul 23 - Aug 22",
            ZodiacSign::Virgo => "Aug 23 - Sep 22",
            ZodiacSign::Libra => "Sep 23 - Oct 22",
            ZodiacSign::Scorpio => "Oct 23 - Nov 21",
            ZodiacSign::Sagittarius => "Nov 22 - Dec 21",
            ZodiacSign::Capricorn => "Dec 22 - Jan 19",
            ZodiacSign::Aquarius => "Jan 20 - Feb 18",
            ZodiacSign::Pisces => "Feb 19 - Mar 20",
        }
    }
}

impl std::fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for ZodiacSign {
    type Err = String;

    /// Case-insensitive sign name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ZodiacSign::ALL
            .into_iter()
            .find(|sign| sign.to_string().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown zodiac sign: {s}"))
    }
}
