//! Color parsing for the Tk-style color values accepted in the environment.
//!
//! Accepts the Tk color names (web values from Tk 8.6 where X11 and CSS
//! disagree, e.g. `green` and `gray`), the X11 numbered shades (`DarkOrange3`),
//! `grayN`/`greyN` for N in 0..=100, and `#` hex with 1 to 4 digits per channel.

use std::collections::HashMap;

use eframe::egui::Color32;
use once_cell::sync::Lazy;

/// Names without numbered shades. Keys are lower case with spaces removed
/// and "grey" spelled "gray".
const NAMES: &[(&str, [u8; 3])] = &[
    ("aliceblue", [240, 248, 255]),
    ("aqua", [0, 255, 255]),
    ("beige", [245, 245, 220]),
    ("black", [0, 0, 0]),
    ("blanchedalmond", [255, 235, 205]),
    ("blueviolet", [138, 43, 226]),
    ("cornflowerblue", [100, 149, 237]),
    ("crimson", [220, 20, 60]),
    ("darkblue", [0, 0, 139]),
    ("darkcyan", [0, 139, 139]),
    ("darkgray", [169, 169, 169]),
    ("darkgreen", [0, 100, 0]),
    ("darkkhaki", [189, 183, 107]),
    ("darkmagenta", [139, 0, 139]),
    ("darkred", [139, 0, 0]),
    ("darksalmon", [233, 150, 122]),
    ("darkslateblue", [72, 61, 139]),
    ("darkturquoise", [0, 206, 209]),
    ("darkviolet", [148, 0, 211]),
    ("dimgray", [105, 105, 105]),
    ("floralwhite", [255, 250, 240]),
    ("forestgreen", [34, 139, 34]),
    ("fuchsia", [255, 0, 255]),
    ("gainsboro", [220, 220, 220]),
    ("ghostwhite", [248, 248, 255]),
    ("gray", [128, 128, 128]),
    ("greenyellow", [173, 255, 47]),
    ("indigo", [75, 0, 130]),
    ("lavender", [230, 230, 250]),
    ("lawngreen", [124, 252, 0]),
    ("lightcoral", [240, 128, 128]),
    ("lightgoldenrodyellow", [250, 250, 210]),
    ("lightgray", [211, 211, 211]),
    ("lightgreen", [144, 238, 144]),
    ("lightseagreen", [32, 178, 170]),
    ("lightslateblue", [132, 112, 255]),
    ("lightslategray", [119, 136, 153]),
    ("lime", [0, 255, 0]),
    ("limegreen", [50, 205, 50]),
    ("linen", [250, 240, 230]),
    ("mediumaquamarine", [102, 205, 170]),
    ("mediumblue", [0, 0, 205]),
    ("mediumseagreen", [60, 179, 113]),
    ("mediumslateblue", [123, 104, 238]),
    ("mediumspringgreen", [0, 250, 154]),
    ("mediumturquoise", [72, 209, 204]),
    ("mediumvioletred", [199, 21, 133]),
    ("midnightblue", [25, 25, 112]),
    ("mintcream", [245, 255, 250]),
    ("moccasin", [255, 228, 181]),
    ("navy", [0, 0, 128]),
    ("navyblue", [0, 0, 128]),
    ("oldlace", [253, 245, 230]),
    ("olive", [128, 128, 0]),
    ("palegoldenrod", [238, 232, 170]),
    ("papayawhip", [255, 239, 213]),
    ("peru", [205, 133, 63]),
    ("powderblue", [176, 224, 230]),
    ("saddlebrown", [139, 69, 19]),
    ("sandybrown", [244, 164, 96]),
    ("silver", [192, 192, 192]),
    ("teal", [0, 128, 128]),
    ("violet", [238, 130, 238]),
    ("white", [255, 255, 255]),
    ("whitesmoke", [245, 245, 245]),
    ("yellowgreen", [154, 205, 50]),
];

/// Names that also come in shades 1 to 4: (name, base color, shade 1).
const SHADED: &[(&str, [u8; 3], [u8; 3])] = &[
    ("antiquewhite", [250, 235, 215], [255, 239, 219]),
    ("aquamarine", [127, 255, 212], [127, 255, 212]),
    ("azure", [240, 255, 255], [240, 255, 255]),
    ("bisque", [255, 228, 196], [255, 228, 196]),
    ("blue", [0, 0, 255], [0, 0, 255]),
    ("brown", [165, 42, 42], [255, 64, 64]),
    ("burlywood", [222, 184, 135], [255, 211, 155]),
    ("cadetblue", [95, 158, 160], [152, 245, 255]),
    ("chartreuse", [127, 255, 0], [127, 255, 0]),
    ("chocolate", [210, 105, 30], [255, 127, 36]),
    ("coral", [255, 127, 80], [255, 114, 86]),
    ("cornsilk", [255, 248, 220], [255, 248, 220]),
    ("cyan", [0, 255, 255], [0, 255, 255]),
    ("darkgoldenrod", [184, 134, 11], [255, 185, 15]),
    ("darkolivegreen", [85, 107, 47], [202, 255, 112]),
    ("darkorange", [255, 140, 0], [255, 127, 0]),
    ("darkorchid", [153, 50, 204], [191, 62, 255]),
    ("darkseagreen", [143, 188, 143], [193, 255, 193]),
    ("darkslategray", [47, 79, 79], [151, 255, 255]),
    ("deeppink", [255, 20, 147], [255, 20, 147]),
    ("deepskyblue", [0, 191, 255], [0, 191, 255]),
    ("dodgerblue", [30, 144, 255], [30, 144, 255]),
    ("firebrick", [178, 34, 34], [255, 48, 48]),
    ("gold", [255, 215, 0], [255, 215, 0]),
    ("goldenrod", [218, 165, 32], [255, 193, 37]),
    ("green", [0, 128, 0], [0, 255, 0]),
    ("honeydew", [240, 255, 240], [240, 255, 240]),
    ("hotpink", [255, 105, 180], [255, 110, 180]),
    ("indianred", [205, 92, 92], [255, 106, 106]),
    ("ivory", [255, 255, 240], [255, 255, 240]),
    ("khaki", [240, 230, 140], [255, 246, 143]),
    ("lavenderblush", [255, 240, 245], [255, 240, 245]),
    ("lemonchiffon", [255, 250, 205], [255, 250, 205]),
    ("lightblue", [173, 216, 230], [191, 239, 255]),
    ("lightcyan", [224, 255, 255], [224, 255, 255]),
    ("lightgoldenrod", [238, 221, 130], [255, 236, 139]),
    ("lightpink", [255, 182, 193], [255, 174, 185]),
    ("lightsalmon", [255, 160, 122], [255, 160, 122]),
    ("lightskyblue", [135, 206, 250], [176, 226, 255]),
    ("lightsteelblue", [176, 196, 222], [202, 225, 255]),
    ("lightyellow", [255, 255, 224], [255, 255, 224]),
    ("magenta", [255, 0, 255], [255, 0, 255]),
    ("maroon", [128, 0, 0], [255, 52, 179]),
    ("mediumorchid", [186, 85, 211], [224, 102, 255]),
    ("mediumpurple", [147, 112, 219], [171, 130, 255]),
    ("mistyrose", [255, 228, 225], [255, 228, 225]),
    ("navajowhite", [255, 222, 173], [255, 222, 173]),
    ("olivedrab", [107, 142, 35], [192, 255, 62]),
    ("orange", [255, 165, 0], [255, 165, 0]),
    ("orangered", [255, 69, 0], [255, 69, 0]),
    ("orchid", [218, 112, 214], [255, 131, 250]),
    ("palegreen", [152, 251, 152], [154, 255, 154]),
    ("paleturquoise", [175, 238, 238], [187, 255, 255]),
    ("palevioletred", [219, 112, 147], [255, 130, 171]),
    ("peachpuff", [255, 218, 185], [255, 218, 185]),
    ("pink", [255, 192, 203], [255, 181, 197]),
    ("plum", [221, 160, 221], [255, 187, 255]),
    ("purple", [128, 0, 128], [155, 48, 255]),
    ("red", [255, 0, 0], [255, 0, 0]),
    ("rosybrown", [188, 143, 143], [255, 193, 193]),
    ("royalblue", [65, 105, 225], [72, 118, 255]),
    ("salmon", [250, 128, 114], [255, 140, 105]),
    ("seagreen", [46, 139, 87], [84, 255, 159]),
    ("seashell", [255, 245, 238], [255, 245, 238]),
    ("sienna", [160, 82, 45], [255, 130, 71]),
    ("skyblue", [135, 206, 235], [135, 206, 255]),
    ("slateblue", [106, 90, 205], [131, 111, 255]),
    ("slategray", [112, 128, 144], [198, 226, 255]),
    ("snow", [255, 250, 250], [255, 250, 250]),
    ("springgreen", [0, 255, 127], [0, 255, 127]),
    ("steelblue", [70, 130, 180], [99, 184, 255]),
    ("tan", [210, 180, 140], [255, 165, 79]),
    ("thistle", [216, 191, 216], [255, 225, 255]),
    ("tomato", [255, 99, 71], [255, 99, 71]),
    ("turquoise", [64, 224, 208], [0, 245, 255]),
    ("violetred", [208, 32, 144], [255, 62, 150]),
    ("wheat", [245, 222, 179], [255, 231, 186]),
    ("yellow", [255, 255, 0], [255, 255, 0]),
];

/// Shades 2 to 4 are shade 1 scaled by 238/255, 205/255 and 139/255.
const SHADE_SCALE: [u32; 4] = [255, 238, 205, 139];

static NAMED_COLORS: Lazy<HashMap<&'static str, [u8; 3]>> = Lazy::new(|| {
    NAMES
        .iter()
        .copied()
        .chain(SHADED.iter().map(|&(name, base, _)| (name, base)))
        .collect()
});

static SHADE_ONE: Lazy<HashMap<&'static str, [u8; 3]>> =
    Lazy::new(|| SHADED.iter().map(|&(name, _, shade)| (name, shade)).collect());

/// Parse a hex or named color into an opaque [`Color32`].
///
/// Returns a human-readable reason on failure; the caller attaches the
/// variable name.
pub fn parse_color(value: &str) -> Result<Color32, String> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }
    let key = value
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase()
        .replace("grey", "gray");
    lookup_name(&key)
        .map(|[r, g, b]| Color32::from_rgb(r, g, b))
        .ok_or_else(|| format!("unknown color name {value:?}"))
}

fn lookup_name(key: &str) -> Option<[u8; 3]> {
    if let Some(rgb) = NAMED_COLORS.get(key) {
        return Some(*rgb);
    }
    // gray0 ..= gray100
    if let Some(level) = key.strip_prefix("gray") {
        if !level.is_empty() && level.chars().all(|c| c.is_ascii_digit()) {
            let level: u8 = level.parse().ok().filter(|n| *n <= 100)?;
            let v = (f64::from(level) * 2.55).round() as u8;
            return Some([v, v, v]);
        }
    }
    // DarkOrange1 ..= DarkOrange4
    let shade = key.chars().last()?.to_digit(10)? as usize;
    if !(1..=4).contains(&shade) {
        return None;
    }
    let base = SHADE_ONE.get(&key[..key.len() - 1])?;
    let scale = SHADE_SCALE[shade - 1];
    Some(base.map(|c| ((u32::from(c) * scale + 127) / 255) as u8))
}

/// `#rgb`, `#rrggbb`, `#rrrgggbbb` or `#rrrrggggbbbb`. Wider channels keep
/// their high byte.
fn parse_hex(hex: &str) -> Result<Color32, String> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("#{hex} is not a hex color"));
    }
    let width = match hex.len() {
        n @ (3 | 6 | 9 | 12) => n / 3,
        n => return Err(format!("hex color must have 3, 6, 9 or 12 digits, got {n}")),
    };
    let channel = |i: usize| -> Result<u8, String> {
        let digits = &hex[i * width..(i + 1) * width];
        let value = if width == 1 {
            // #f80 == #ff8800
            u8::from_str_radix(digits, 16).map_err(|e| e.to_string())? * 17
        } else {
            u8::from_str_radix(&digits[..2], 16).map_err(|e| e.to_string())?
        };
        Ok(value)
    };
    Ok(Color32::from_rgb(channel(0)?, channel(1)?, channel(2)?))
}
