// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Porter 词干提取
//!
//! 与 Sphinx 英文索引使用的原始 Porter 算法一致（不是 Porter2），
//! 查询词必须与索引中的词条按同样的规则归一，否则无法命中。

use once_cell::sync::Lazy;
use regex::Regex;

// consonant / vowel classes; a leading 'y' is upper-cased so it counts as a consonant
const C_SEQ: &str = "[^aeiou][^aeiouy]*";
const V_SEQ: &str = "[aeiouy][aeiou]*";
const V_CHAR: &str = "[aeiouy]";

/// [C]VC... 即 m>0
static MGR0: Lazy<Regex> = Lazy::new(|| Regex::new(&format!("^({C_SEQ})?{V_SEQ}{C_SEQ}")).unwrap());
/// [C]VC[V] 即 m=1
static MEQ1: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^({C_SEQ})?{V_SEQ}{C_SEQ}({V_SEQ})?$")).unwrap());
/// [C]VCVC... 即 m>1
static MGR1: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^({C_SEQ})?{V_SEQ}{C_SEQ}{V_SEQ}{C_SEQ}")).unwrap());
/// 词干中含元音
static S_V: Lazy<Regex> = Lazy::new(|| Regex::new(&format!("^({C_SEQ})?{V_CHAR}")).unwrap());
/// 以 CVC 结尾的短词（末尾不是 w、x、y）
static CVC: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^{C_SEQ}{V_CHAR}[^aeiouwxy]$")).unwrap());

static STEP1A_IES: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.+?)(ss|i)es$").unwrap());
static STEP1A_S: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.+?)([^s])s$").unwrap());
static STEP1B_EED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.+?)eed$").unwrap());
static STEP1B_ED_ING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.+?)(ed|ing)$").unwrap());
static STEP1B_AT_BL_IZ: Lazy<Regex> = Lazy::new(|| Regex::new(r"(at|bl|iz)$").unwrap());
static STEP1C: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.+?)y$").unwrap());
static STEP2: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(.+?)(ational|tional|enci|anci|izer|bli|alli|entli|eli|ousli|ization|ation|ator|alism|iveness|fulness|ousness|aliti|iviti|biliti|logi)$",
    )
    .unwrap()
});
static STEP3: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)(icate|ative|alize|iciti|ical|ful|ness)$").unwrap());
static STEP4: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(.+?)(al|ance|ence|er|ic|able|ible|ant|ement|ment|ent|ou|ism|ate|iti|ous|ive|ize)$",
    )
    .unwrap()
});
static STEP4_ION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.+?)(s|t)(ion)$").unwrap());
static STEP5: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.+?)e$").unwrap());

fn step2_replacement(suffix: &str) -> &'static str {
    match suffix {
        "ational" => "ate",
        "tional" => "tion",
        "enci" => "ence",
        "anci" => "ance",
        "izer" => "ize",
        "bli" => "ble",
        "alli" => "al",
        "entli" => "ent",
        "eli" => "e",
        "ousli" => "ous",
        "ization" => "ize",
        "ation" => "ate",
        "ator" => "ate",
        "alism" => "al",
        "iveness" => "ive",
        "fulness" => "ful",
        "ousness" => "ous",
        "aliti" => "al",
        "iviti" => "ive",
        "biliti" => "ble",
        "logi" => "log",
        _ => "",
    }
}

fn step3_replacement(suffix: &str) -> &'static str {
    match suffix {
        "icate" => "ic",
        "alize" => "al",
        "iciti" => "ic",
        "ical" => "ic",
        // ative, ful, ness
        _ => "",
    }
}

/// 以相同辅音结尾（l、s、z 除外）
fn ends_with_double_consonant(word: &str) -> bool {
    let mut rev = word.chars().rev();
    match (rev.next(), rev.next()) {
        (Some(last), Some(prev)) => last == prev && !"aeiouylsz".contains(last),
        _ => false,
    }
}

fn drop_last_char(word: &mut String) {
    word.pop();
}

/// 返回小写单词的词干
pub fn stem(word: &str) -> String {
    if word.chars().count() < 3 {
        return word.to_string();
    }

    let starts_with_y = word.starts_with('y');
    let mut w = if starts_with_y {
        format!("Y{}", &word[1..])
    } else {
        word.to_string()
    };

    // Step 1a
    if let Some(caps) = STEP1A_IES.captures(&w) {
        w = format!("{}{}", &caps[1], &caps[2]);
    } else if let Some(caps) = STEP1A_S.captures(&w) {
        w = format!("{}{}", &caps[1], &caps[2]);
    }

    // Step 1b
    if let Some(caps) = STEP1B_EED.captures(&w) {
        if MGR0.is_match(&caps[1]) {
            drop_last_char(&mut w);
        }
    } else if let Some(caps) = STEP1B_ED_ING.captures(&w) {
        let stem = caps[1].to_string();
        if S_V.is_match(&stem) {
            w = stem;
            if STEP1B_AT_BL_IZ.is_match(&w) {
                w.push('e');
            } else if ends_with_double_consonant(&w) {
                drop_last_char(&mut w);
            } else if CVC.is_match(&w) {
                w.push('e');
            }
        }
    }

    // Step 1c
    if let Some(caps) = STEP1C.captures(&w) {
        let stem = &caps[1];
        if S_V.is_match(stem) {
            w = format!("{}i", stem);
        }
    }

    // Step 2
    if let Some(caps) = STEP2.captures(&w) {
        let stem = &caps[1];
        if MGR0.is_match(stem) {
            w = format!("{}{}", stem, step2_replacement(&caps[2]));
        }
    }

    // Step 3
    if let Some(caps) = STEP3.captures(&w) {
        let stem = &caps[1];
        if MGR0.is_match(stem) {
            w = format!("{}{}", stem, step3_replacement(&caps[2]));
        }
    }

    // Step 4
    if let Some(caps) = STEP4.captures(&w) {
        let stem = caps[1].to_string();
        if MGR1.is_match(&stem) {
            w = stem;
        }
    } else if let Some(caps) = STEP4_ION.captures(&w) {
        let stem = format!("{}{}", &caps[1], &caps[2]);
        if MGR1.is_match(&stem) {
            w = stem;
        }
    }

    // Step 5
    if let Some(caps) = STEP5.captures(&w) {
        let stem = caps[1].to_string();
        if MGR1.is_match(&stem) || (MEQ1.is_match(&stem) && !CVC.is_match(&stem)) {
            w = stem;
        }
    }
    if w.ends_with("ll") && MGR1.is_match(&w) {
        drop_last_char(&mut w);
    }

    if starts_with_y {
        w.replace_range(0..1, "y");
    }
    w
}
