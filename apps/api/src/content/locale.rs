//! Locale resources: every user-facing string, keyed by language.
//!
//! Call sites never branch on the language; they fetch `lang.resources()` and read
//! the field they need. Adding a language means adding one `Resources` static.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Hi,
}

#[derive(Debug, Error)]
#[error("unsupported language: {0}")]
pub struct UnknownLang(pub String);

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Hi => "hi",
        }
    }

    pub fn resources(self) -> &'static Resources {
        match self {
            Lang::En => &EN,
            Lang::Hi => &HI,
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Lang {
    type Err = UnknownLang;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Lang::En),
            "hi" | "hindi" => Ok(Lang::Hi),
            other => Err(UnknownLang(other.to_string())),
        }
    }
}

/// Section headings and field labels.
pub struct Labels {
    pub opportunities: &'static str,
    pub cautions: &'static str,
    pub remedy: &'static str,
    pub lucky_color: &'static str,
    pub lucky_number: &'static str,
    pub vedic_timings: &'static str,
    pub rahu_kaal: &'static str,
    pub yamaganda: &'static str,
    pub gulika_kaal: &'static str,
    pub abhijit_muhurat: &'static str,
    pub ruling_pair: &'static str,
    pub ritual: &'static str,
    pub special_day: &'static str,
    pub note: &'static str,
    pub daily_title: &'static str,
    pub weekly_title: &'static str,
    pub gemstone_title: &'static str,
    pub mantra_title: &'static str,
    pub yearly_title: &'static str,
    pub prepared_for: &'static str,
    pub birth_details: &'static str,
    pub ruling_planet: &'static str,
    pub primary_gem: &'static str,
    pub alternate_gem: &'static str,
    pub how_to_wear: &'static str,
    pub caveat: &'static str,
    pub seed_mantra: &'static str,
    pub recitations: &'static str,
    pub practice: &'static str,
    pub focus: &'static str,
    pub insights: &'static str,
    pub week_of: &'static str,
    pub notes: &'static str,
}

/// Localized text for one ruling planet.
pub struct PlanetText {
    pub name: &'static str,
    pub primary_gem: &'static str,
    pub alternate_gem: &'static str,
    pub wearing: &'static str,
    pub mantra: &'static str,
}

/// Localized text for a sign-specific gemstone override.
pub struct GemOverrideText {
    pub primary_gem: &'static str,
    pub alternate_gem: &'static str,
    pub caveat: &'static str,
}

pub struct Resources {
    pub weekday_names: [&'static str; 7],
    pub month_names: [&'static str; 12],
    pub month_abbrev: [&'static str; 12],
    pub sign_names: [&'static str; 12],
    /// `{name}` is replaced with the user's name.
    pub greeting_named: &'static str,
    pub greeting: &'static str,
    pub leads: &'static [&'static str],
    pub opportunities: &'static [&'static str],
    pub cautions: &'static [&'static str],
    pub colors: &'static [&'static str],
    /// Indexed by weekday (Sunday = 0).
    pub remedies: [&'static str; 7],
    pub ruling_pairs: [&'static str; 7],
    pub rituals: [&'static str; 7],
    /// Indexed by `Planet::index()`.
    pub planets: [PlanetText; 7],
    pub aquarius_gem: GemOverrideText,
    /// Indexed by the position in `tables::OBSERVANCES`.
    pub observances: [&'static str; 7],
    /// `{name}` is replaced with the observance name.
    pub observance_message: &'static str,
    /// `{name}` is replaced with the user's name.
    pub birthday_named: &'static str,
    pub birthday: &'static str,
    pub disclaimer: &'static str,
    /// Indexed by `Persona::index()`.
    pub persona_focus: [&'static str; 5],
    pub general_focus: &'static str,
    pub monthly_themes: &'static [&'static str],
    pub mantra_practice: [&'static str; 3],
    pub gemstone_notes: [&'static str; 3],
    pub labels: Labels,
}

static EN: Resources = Resources {
    weekday_names: [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ],
    month_names: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    month_abbrev: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    sign_names: [
        "Aries",
        "Taurus",
        "Gemini",
        "Cancer",
        "Leo",
        "Virgo",
        "Libra",
        "Scorpio",
        "Sagittarius",
        "Capricorn",
        "Aquarius",
        "Pisces",
    ],
    greeting_named: "Namaste, {name}!",
    greeting: "Namaste!",
    leads: &[
        "The Moon's quiet pull favours steady, deliberate steps today.",
        "A fresh current of energy opens doors you had written off.",
        "Patience is your quiet strength this day.",
        "Conversations carry more weight than usual, so choose words with care.",
        "Small, consistent efforts line up into visible progress.",
        "An old idea returns with new clarity.",
        "Your instincts are sharper than the noise around you.",
        "Today rewards order: tidy one corner of life and the rest follows.",
        "Generosity comes back to you in unexpected ways.",
        "A calm mind turns today's pressure into momentum.",
        "Planetary winds favour learning something new.",
        "Relationships thrive when you listen first.",
        "Trust the slower path; it is the surer one today.",
    ],
    opportunities: &[
        "Reach out to a mentor or senior for guidance",
        "Start a task you have been postponing",
        "Review your finances and trim one needless expense",
        "Share an idea at work; it will find support",
        "Spend unhurried time with family",
        "Learn a new skill, even for twenty minutes",
        "Reconnect with an old friend",
        "Organise your workspace for clearer thinking",
        "Put a long-term plan on paper",
        "Offer help to someone without being asked",
        "Take a short walk in nature to reset",
        "Follow up on a pending payment or proposal",
    ],
    cautions: &[
        "Avoid signing important papers in haste",
        "Keep arguments over small matters at bay",
        "Do not lend money you cannot afford to lose",
        "Watch your diet and skip heavy late-night meals",
        "Double-check messages before sending",
        "Avoid overcommitting your time",
        "Drive and travel with extra care",
        "Do not share confidential plans too early",
        "Guard against impulsive purchases",
        "Resist the urge to react to criticism at once",
        "Avoid starting new ventures during Rahu Kaal",
        "Keep ego out of team decisions",
    ],
    colors: &[
        "Red",
        "Orange",
        "Yellow",
        "Green",
        "Sky Blue",
        "Royal Blue",
        "White",
        "Cream",
        "Pink",
        "Purple",
        "Maroon",
        "Silver Grey",
    ],
    remedies: [
        "Offer water to the rising Sun and chant 'Om Suryaya Namah' 11 times.",
        "Offer milk or water on a Shivling and chant 'Om Namah Shivaya'.",
        "Recite the Hanuman Chalisa and share jaggery with someone in need.",
        "Offer durva grass to Lord Ganesha and feed green fodder to a cow.",
        "Light a ghee lamp for Lord Vishnu and wear a touch of yellow.",
        "Offer white flowers to Goddess Lakshmi and share sweets with young girls.",
        "Light a mustard-oil lamp under a peepal tree and help a labourer.",
    ],
    ruling_pairs: [
        "Surya Dev – Sun",
        "Lord Shiva – Moon",
        "Lord Hanuman – Mars",
        "Lord Ganesha – Mercury",
        "Lord Vishnu – Jupiter",
        "Goddess Lakshmi – Venus",
        "Shani Dev – Saturn",
    ],
    rituals: [
        "Surya Namaskar at sunrise",
        "Shiva abhishek with water",
        "Hanuman Chalisa recitation",
        "Ganesh vandana before new work",
        "Vishnu Sahasranama or a yellow offering",
        "Lakshmi puja in the evening",
        "Charity of black sesame or mustard oil",
    ],
    planets: [
        PlanetText {
            name: "Sun",
            primary_gem: "Ruby (Manik)",
            alternate_gem: "Red Garnet",
            wearing: "Set in gold, on the ring finger, on a Sunday morning.",
            mantra: "Om Hraam Hreem Hraum Sah Suryaya Namah",
        },
        PlanetText {
            name: "Moon",
            primary_gem: "Pearl (Moti)",
            alternate_gem: "Moonstone",
            wearing: "Set in silver, on the little finger, on a Monday evening.",
            mantra: "Om Shraam Shreem Shraum Sah Chandraya Namah",
        },
        PlanetText {
            name: "Mars",
            primary_gem: "Red Coral (Moonga)",
            alternate_gem: "Carnelian",
            wearing: "Set in gold or copper, on the ring finger, on a Tuesday morning.",
            mantra: "Om Kraam Kreem Kraum Sah Bhaumaya Namah",
        },
        PlanetText {
            name: "Mercury",
            primary_gem: "Emerald (Panna)",
            alternate_gem: "Peridot",
            wearing: "Set in gold, on the little finger, on a Wednesday morning.",
            mantra: "Om Braam Breem Braum Sah Budhaya Namah",
        },
        PlanetText {
            name: "Jupiter",
            primary_gem: "Yellow Sapphire (Pukhraj)",
            alternate_gem: "Citrine (Sunehla)",
            wearing: "Set in gold, on the index finger, on a Thursday morning.",
            mantra: "Om Graam Greem Graum Sah Gurave Namah",
        },
        PlanetText {
            name: "Venus",
            primary_gem: "Diamond (Heera)",
            alternate_gem: "White Sapphire or Opal",
            wearing: "Set in silver or platinum, on the middle finger, on a Friday morning.",
            mantra: "Om Draam Dreem Draum Sah Shukraya Namah",
        },
        PlanetText {
            name: "Saturn",
            primary_gem: "Blue Sapphire (Neelam)",
            alternate_gem: "Amethyst (Jamunia)",
            wearing: "Set in silver or panchdhatu, on the middle finger, on a Saturday evening.",
            mantra: "Om Praam Preem Praum Sah Shanaischaraya Namah",
        },
    ],
    aquarius_gem: GemOverrideText {
        primary_gem: "Amethyst (Jamunia)",
        alternate_gem: "Blue Sapphire (Neelam), only after a trial period",
        caveat: "Blue Sapphire is not advised for Aquarius without a personal chart reading; Amethyst is the gentler choice.",
    },
    observances: [
        "New Year's Day",
        "Republic Day",
        "International Women's Day",
        "International Yoga Day",
        "Independence Day",
        "Gandhi Jayanti",
        "Children's Day",
    ],
    observance_message: "Today is {name}. Let its spirit guide your choices.",
    birthday_named: "Happy birthday, {name}! The stars open a fresh personal year for you.",
    birthday: "Happy birthday! The stars open a fresh personal year for you.",
    disclaimer: "This guidance is for reflection and entertainment only. It is not a substitute for professional medical, legal or financial advice.",
    persona_focus: [
        "Review client commitments and cash flow before taking on new work.",
        "Make your contribution visible and keep your manager in the loop.",
        "Carve out an hour of rest for yourself; the household runs better for it.",
        "Protect your study hours and revise before you learn anything new.",
        "Use the quiet time to plan your next step and build one new skill.",
    ],
    general_focus: "Balance effort with rest and keep your commitments realistic.",
    monthly_themes: &[
        "Foundations: settle pending paperwork and routines.",
        "Momentum: push forward on the goal you set earlier.",
        "Relationships: invest time in partnerships and family.",
        "Career: visibility and recognition come through steady work.",
        "Finance: budget carefully and avoid speculative bets.",
        "Health: build a simple daily wellness habit.",
        "Learning: courses, books and mentors bring growth.",
        "Travel: short journeys refresh your outlook.",
        "Home: repairs, moves or family events need attention.",
        "Reflection: slow down and review what is working.",
        "Creativity: hobbies and new ideas flourish.",
        "Service: helping others brings quiet rewards.",
    ],
    mantra_practice: [
        "Chant after bathing, facing east, in a calm place.",
        "Use a rudraksha or tulsi mala to keep count.",
        "Keep the practice regular for at least 40 days.",
    ],
    gemstone_notes: [
        "Buy only a natural, untreated and certified stone.",
        "Energise the stone with its mantra before first wearing.",
        "Consult an astrologer with your full birth chart before wearing any primary gemstone.",
    ],
    labels: Labels {
        opportunities: "Opportunities",
        cautions: "Cautions",
        remedy: "Remedy",
        lucky_color: "Lucky colour",
        lucky_number: "Lucky number",
        vedic_timings: "Vedic timings",
        rahu_kaal: "Rahu Kaal",
        yamaganda: "Yamaganda",
        gulika_kaal: "Gulika Kaal",
        abhijit_muhurat: "Abhijit Muhurat",
        ruling_pair: "Ruling pair",
        ritual: "Suggested ritual",
        special_day: "Special day",
        note: "Note",
        daily_title: "Daily Horoscope",
        weekly_title: "Weekly Horoscope",
        gemstone_title: "Gemstone Guidance",
        mantra_title: "Mantra Guidance",
        yearly_title: "Yearly Roadmap",
        prepared_for: "Prepared for",
        birth_details: "Birth details",
        ruling_planet: "Ruling planet",
        primary_gem: "Primary gemstone",
        alternate_gem: "Alternate gemstone",
        how_to_wear: "How to wear",
        caveat: "Caution",
        seed_mantra: "Seed mantra",
        recitations: "Recitations",
        practice: "Practice",
        focus: "Focus",
        insights: "Insights",
        week_of: "Week of",
        notes: "Your notes",
    },
};

static HI: Resources = Resources {
    weekday_names: [
        "रविवार",
        "सोमवार",
        "मंगलवार",
        "बुधवार",
        "गुरुवार",
        "शुक्रवार",
        "शनिवार",
    ],
    month_names: [
        "जनवरी",
        "फ़रवरी",
        "मार्च",
        "अप्रैल",
        "मई",
        "जून",
        "जुलाई",
        "अगस्त",
        "सितंबर",
        "अक्टूबर",
        "नवंबर",
        "दिसंबर",
    ],
    month_abbrev: [
        "जन", "फ़र", "मार्च", "अप्रै", "मई", "जून", "जुला", "अग", "सितं", "अक्टू", "नवं", "दिसं",
    ],
    sign_names: [
        "मेष",
        "वृषभ",
        "मिथुन",
        "कर्क",
        "सिंह",
        "कन्या",
        "तुला",
        "वृश्चिक",
        "धनु",
        "मकर",
        "कुंभ",
        "मीन",
    ],
    greeting_named: "नमस्ते, {name}!",
    greeting: "नमस्ते!",
    leads: &[
        "आज चंद्रमा का शांत प्रभाव धीरे और सोच-समझकर कदम बढ़ाने का संकेत देता है।",
        "नई ऊर्जा उन रास्तों को खोलती है जिन्हें आप बंद मान चुके थे।",
        "आज धैर्य ही आपकी सबसे बड़ी शक्ति है।",
        "आज बातचीत का असर गहरा रहेगा, इसलिए शब्द सोच-समझकर चुनें।",
        "छोटे लेकिन लगातार प्रयास आज साफ़ प्रगति में बदलेंगे।",
        "कोई पुराना विचार नई स्पष्टता के साथ लौटता है।",
        "आपकी अंतःप्रेरणा आसपास के शोर से कहीं अधिक सटीक है।",
        "आज व्यवस्था का दिन है: जीवन का एक कोना सँवारें, बाकी अपने-आप सँवरेगा।",
        "आपकी उदारता अप्रत्याशित रूप से आपके पास लौटेगी।",
        "शांत मन आज के दबाव को गति में बदल देगा।",
        "ग्रहों की चाल आज कुछ नया सीखने के पक्ष में है।",
        "पहले सुनें, फिर बोलें; रिश्ते इसी से मज़बूत होंगे।",
        "धीमे रास्ते पर भरोसा रखें; आज वही सुरक्षित है।",
    ],
    opportunities: &[
        "किसी मार्गदर्शक या वरिष्ठ से सलाह लें",
        "टाला हुआ काम आज शुरू करें",
        "अपने खर्चों की समीक्षा करें और एक अनावश्यक खर्च घटाएँ",
        "काम पर अपना विचार साझा करें, समर्थन मिलेगा",
        "परिवार के साथ बिना जल्दबाज़ी के समय बिताएँ",
        "कोई नया कौशल सीखें, चाहे बीस मिनट ही सही",
        "किसी पुराने मित्र से फिर संपर्क करें",
        "साफ़ सोच के लिए अपना कार्यस्थल व्यवस्थित करें",
        "लंबी अवधि की योजना कागज़ पर लिखें",
        "बिना कहे किसी की मदद करें",
        "मन को ताज़ा करने के लिए प्रकृति में थोड़ी सैर करें",
        "अटके हुए भुगतान या प्रस्ताव पर फ़ॉलो-अप करें",
    ],
    cautions: &[
        "महत्वपूर्ण कागज़ों पर जल्दबाज़ी में हस्ताक्षर न करें",
        "छोटी बातों पर बहस से बचें",
        "उतना ही उधार दें जितना खोने का जोखिम उठा सकें",
        "खान-पान पर ध्यान दें, देर रात भारी भोजन न करें",
        "संदेश भेजने से पहले दोबारा जाँच लें",
        "अपने समय से अधिक वादे न करें",
        "वाहन चलाते और यात्रा करते समय अतिरिक्त सावधानी रखें",
        "गोपनीय योजनाएँ समय से पहले साझा न करें",
        "आवेग में ख़रीदारी से बचें",
        "आलोचना पर तुरंत प्रतिक्रिया देने से बचें",
        "राहु काल में नया काम शुरू न करें",
        "टीम के निर्णयों में अहंकार को दूर रखें",
    ],
    colors: &[
        "लाल",
        "नारंगी",
        "पीला",
        "हरा",
        "आसमानी",
        "गहरा नीला",
        "सफ़ेद",
        "क्रीम",
        "गुलाबी",
        "बैंगनी",
        "मैरून",
        "सिल्वर ग्रे",
    ],
    remedies: [
        "उगते सूर्य को जल अर्पित करें और 11 बार 'ॐ सूर्याय नमः' का जाप करें।",
        "शिवलिंग पर दूध या जल चढ़ाएँ और 'ॐ नमः शिवाय' का जाप करें।",
        "हनुमान चालीसा का पाठ करें और किसी ज़रूरतमंद को गुड़ दें।",
        "भगवान गणेश को दूर्वा अर्पित करें और गाय को हरा चारा खिलाएँ।",
        "भगवान विष्णु के लिए घी का दीपक जलाएँ और कुछ पीला पहनें।",
        "माँ लक्ष्मी को सफ़ेद फूल अर्पित करें और कन्याओं को मिठाई बाँटें।",
        "पीपल के नीचे सरसों के तेल का दीपक जलाएँ और किसी श्रमिक की मदद करें।",
    ],
    ruling_pairs: [
        "सूर्य देव – सूर्य",
        "भगवान शिव – चंद्र",
        "हनुमान जी – मंगल",
        "भगवान गणेश – बुध",
        "भगवान विष्णु – गुरु",
        "माँ लक्ष्मी – शुक्र",
        "शनि देव – शनि",
    ],
    rituals: [
        "सूर्योदय पर सूर्य नमस्कार",
        "जल से शिव अभिषेक",
        "हनुमान चालीसा पाठ",
        "नए काम से पहले गणेश वंदना",
        "विष्णु सहस्रनाम या पीली वस्तु का दान",
        "संध्या समय लक्ष्मी पूजा",
        "काले तिल या सरसों के तेल का दान",
    ],
    planets: [
        PlanetText {
            name: "सूर्य",
            primary_gem: "माणिक्य",
            alternate_gem: "लाल गार्नेट",
            wearing: "सोने में, अनामिका उंगली में, रविवार सुबह धारण करें।",
            mantra: "ॐ ह्रां ह्रीं ह्रौं सः सूर्याय नमः",
        },
        PlanetText {
            name: "चंद्र",
            primary_gem: "मोती",
            alternate_gem: "चंद्रकांत मणि",
            wearing: "चाँदी में, कनिष्ठा उंगली में, सोमवार शाम धारण करें।",
            mantra: "ॐ श्रां श्रीं श्रौं सः चंद्राय नमः",
        },
        PlanetText {
            name: "मंगल",
            primary_gem: "मूंगा",
            alternate_gem: "कार्नेलियन",
            wearing: "सोने या ताँबे में, अनामिका उंगली में, मंगलवार सुबह धारण करें।",
            mantra: "ॐ क्रां क्रीं क्रौं सः भौमाय नमः",
        },
        PlanetText {
            name: "बुध",
            primary_gem: "पन्ना",
            alternate_gem: "पेरिडॉट",
            wearing: "सोने में, कनिष्ठा उंगली में, बुधवार सुबह धारण करें।",
            mantra: "ॐ ब्रां ब्रीं ब्रौं सः बुधाय नमः",
        },
        PlanetText {
            name: "गुरु",
            primary_gem: "पुखराज",
            alternate_gem: "सुनहला",
            wearing: "सोने में, तर्जनी उंगली में, गुरुवार सुबह धारण करें।",
            mantra: "ॐ ग्रां ग्रीं ग्रौं सः गुरवे नमः",
        },
        PlanetText {
            name: "शुक्र",
            primary_gem: "हीरा",
            alternate_gem: "सफ़ेद पुखराज या ओपल",
            wearing: "चाँदी या प्लेटिनम में, मध्यमा उंगली में, शुक्रवार सुबह धारण करें।",
            mantra: "ॐ द्रां द्रीं द्रौं सः शुक्राय नमः",
        },
        PlanetText {
            name: "शनि",
            primary_gem: "नीलम",
            alternate_gem: "जामुनिया",
            wearing: "चाँदी या पंचधातु में, मध्यमा उंगली में, शनिवार शाम धारण करें।",
            mantra: "ॐ प्रां प्रीं प्रौं सः शनैश्चराय नमः",
        },
    ],
    aquarius_gem: GemOverrideText {
        primary_gem: "जामुनिया",
        alternate_gem: "नीलम, केवल परीक्षण अवधि के बाद",
        caveat: "कुंभ राशि के लिए व्यक्तिगत कुंडली देखे बिना नीलम की सलाह नहीं दी जाती; जामुनिया सौम्य विकल्प है।",
    },
    observances: [
        "नववर्ष",
        "गणतंत्र दिवस",
        "अंतरराष्ट्रीय महिला दिवस",
        "अंतरराष्ट्रीय योग दिवस",
        "स्वतंत्रता दिवस",
        "गांधी जयंती",
        "बाल दिवस",
    ],
    observance_message: "आज {name} है। इसकी भावना आपके निर्णयों का मार्गदर्शन करे।",
    birthday_named: "जन्मदिन की शुभकामनाएँ, {name}! सितारे आपके लिए एक नया व्यक्तिगत वर्ष खोल रहे हैं।",
    birthday: "जन्मदिन की शुभकामनाएँ! सितारे आपके लिए एक नया व्यक्तिगत वर्ष खोल रहे हैं।",
    disclaimer: "यह मार्गदर्शन केवल चिंतन और मनोरंजन के लिए है। यह किसी चिकित्सकीय, कानूनी या वित्तीय सलाह का विकल्प नहीं है।",
    persona_focus: [
        "नया काम लेने से पहले ग्राहकों की प्रतिबद्धताओं और नकदी प्रवाह की समीक्षा करें।",
        "अपने योगदान को दिखने दें और अपने प्रबंधक को जानकारी देते रहें।",
        "अपने लिए एक घंटा विश्राम निकालें; घर इससे बेहतर चलेगा।",
        "पढ़ाई के समय की रक्षा करें और नया सीखने से पहले दोहराएँ।",
        "इस शांत समय में अगला कदम तय करें और एक नया कौशल सीखें।",
    ],
    general_focus: "प्रयास और विश्राम में संतुलन रखें और वादे यथार्थवादी रखें।",
    monthly_themes: &[
        "नींव: लंबित कागज़ी काम और दिनचर्या व्यवस्थित करें।",
        "गति: पहले तय किए लक्ष्य पर आगे बढ़ें।",
        "संबंध: साझेदारी और परिवार में समय लगाएँ।",
        "करियर: निरंतर काम से पहचान और सम्मान मिलेगा।",
        "वित्त: सावधानी से बजट बनाएँ और सट्टे से बचें।",
        "स्वास्थ्य: रोज़ की एक सरल स्वास्थ्य आदत बनाएँ।",
        "शिक्षा: पाठ्यक्रम, पुस्तकें और गुरु विकास लाएँगे।",
        "यात्रा: छोटी यात्राएँ दृष्टिकोण को ताज़ा करेंगी।",
        "घर: मरम्मत, स्थान परिवर्तन या पारिवारिक आयोजन ध्यान माँगेंगे।",
        "चिंतन: गति धीमी करें और देखें क्या काम कर रहा है।",
        "रचनात्मकता: शौक और नए विचार फलेंगे।",
        "सेवा: दूसरों की मदद से शांत पुरस्कार मिलेंगे।",
    ],
    mantra_practice: [
        "स्नान के बाद, पूर्व दिशा की ओर मुख करके, शांत स्थान पर जाप करें।",
        "गिनती के लिए रुद्राक्ष या तुलसी की माला का प्रयोग करें।",
        "कम से कम 40 दिनों तक नियमित अभ्यास करें।",
    ],
    gemstone_notes: [
        "केवल प्राकृतिक, बिना उपचारित और प्रमाणित रत्न ही खरीदें।",
        "पहली बार पहनने से पहले रत्न को उसके मंत्र से अभिमंत्रित करें।",
        "कोई भी प्रमुख रत्न पहनने से पहले अपनी पूरी कुंडली के साथ ज्योतिषी से परामर्श करें।",
    ],
    labels: Labels {
        opportunities: "अवसर",
        cautions: "सावधानियाँ",
        remedy: "उपाय",
        lucky_color: "शुभ रंग",
        lucky_number: "शुभ अंक",
        vedic_timings: "वैदिक समय",
        rahu_kaal: "राहु काल",
        yamaganda: "यमगंड",
        gulika_kaal: "गुलिक काल",
        abhijit_muhurat: "अभिजीत मुहूर्त",
        ruling_pair: "दिन के अधिपति",
        ritual: "सुझाया गया अनुष्ठान",
        special_day: "विशेष दिन",
        note: "सूचना",
        daily_title: "दैनिक राशिफल",
        weekly_title: "साप्ताहिक राशिफल",
        gemstone_title: "रत्न मार्गदर्शन",
        mantra_title: "मंत्र मार्गदर्शन",
        yearly_title: "वार्षिक रूपरेखा",
        prepared_for: "के लिए तैयार",
        birth_details: "जन्म विवरण",
        ruling_planet: "स्वामी ग्रह",
        primary_gem: "मुख्य रत्न",
        alternate_gem: "वैकल्पिक रत्न",
        how_to_wear: "कैसे धारण करें",
        caveat: "सावधानी",
        seed_mantra: "बीज मंत्र",
        recitations: "जाप संख्या",
        practice: "अभ्यास",
        focus: "ध्यान दें",
        insights: "अंतर्दृष्टि",
        week_of: "सप्ताह",
        notes: "आपके नोट्स",
    },
};
