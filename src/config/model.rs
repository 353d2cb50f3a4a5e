use chrono::{Locale, NaiveDate, Weekday};

use crate::config::format::PageFormat;
use crate::events::model::Event;
use crate::foundation::core::{Orientation, Rgba8};
use crate::foundation::error::{PhotocalError, PhotocalResult};

/// An option value that may differ between landscape and portrait pages.
///
/// Parsed from `VALUE` (both orientations) or `LANDSCAPE~PORTRAIT`. Every
/// dual is collapsed exactly once, in [`PageSettings::resolve`], before any
/// layout runs.
#[derive(Clone, Debug, PartialEq)]
pub struct Dual<T> {
    pub landscape: T,
    pub portrait: T,
}

impl<T: Clone> Dual<T> {
    /// Use the same value for both orientations.
    pub fn uniform(value: T) -> Self {
        Self {
            landscape: value.clone(),
            portrait: value,
        }
    }

    /// Collapse to the value for `orientation`.
    pub fn pick(&self, orientation: Orientation) -> T {
        if orientation.is_landscape() {
            self.landscape.clone()
        } else {
            self.portrait.clone()
        }
    }
}

impl<T> std::str::FromStr for Dual<T>
where
    T: std::str::FromStr + Clone,
    T::Err: std::fmt::Display,
{
    type Err = PhotocalError;

    fn from_str(s: &str) -> PhotocalResult<Self> {
        let parse = |part: &str| -> PhotocalResult<T> {
            part.parse::<T>()
                .map_err(|e| PhotocalError::config(format!("invalid value '{part}': {e}")))
        };
        match s.split_once('~') {
            Some((landscape, portrait)) => Ok(Self {
                landscape: parse(landscape)?,
                portrait: parse(portrait)?,
            }),
            None => Ok(Self::uniform(parse(s)?)),
        }
    }
}

/// Page dimensions in pixels, parsed from `WIDTHxHEIGHT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageSize {
    pub w: u32,
    pub h: u32,
}

impl std::str::FromStr for PageSize {
    type Err = PhotocalError;

    fn from_str(s: &str) -> PhotocalResult<Self> {
        let (w, h) = s
            .split_once('x')
            .ok_or_else(|| PhotocalError::config(format!("size '{s}' must be WIDTHxHEIGHT")))?;
        let parse = |part: &str| -> PhotocalResult<u32> {
            match part.trim().parse::<u32>() {
                Ok(v) if v > 0 => Ok(v),
                _ => Err(PhotocalError::config(format!(
                    "size '{s}' has invalid dimension '{part}'"
                ))),
            }
        };
        Ok(Self {
            w: parse(w)?,
            h: parse(h)?,
        })
    }
}

/// A font request: a face name plus an optional explicit pixel size, parsed
/// from `FAMILY` or `FAMILY:SIZE`. An explicit size bypasses the fit search
/// wherever the font is used; the caption band additionally derives its band
/// height from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontSpec {
    pub family: String,
    pub size: Option<u32>,
}

impl FontSpec {
    pub fn named(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            size: None,
        }
    }
}

impl std::str::FromStr for FontSpec {
    type Err = PhotocalError;

    fn from_str(s: &str) -> PhotocalResult<Self> {
        if s.is_empty() {
            return Err(PhotocalError::config("font spec must not be empty"));
        }
        match s.rsplit_once(':') {
            Some((family, size)) => {
                let size: u32 = size.parse().map_err(|_| {
                    PhotocalError::config(format!("font spec '{s}' has invalid size '{size}'"))
                })?;
                if size == 0 || family.is_empty() {
                    return Err(PhotocalError::config(format!("invalid font spec '{s}'")));
                }
                Ok(Self {
                    family: family.to_string(),
                    size: Some(size),
                })
            }
            None => Ok(Self::named(s)),
        }
    }
}

impl std::fmt::Display for FontSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.size {
            Some(size) => write!(f, "{}:{}", self.family, size),
            None => write!(f, "{}", self.family),
        }
    }
}

/// Parse a weekday from a name (`mon`, `monday`, ...) or a number 0-6 where
/// 0 is Monday.
pub fn parse_weekday(s: &str) -> PhotocalResult<Weekday> {
    const DAYS: [(&str, Weekday); 7] = [
        ("mon", Weekday::Mon),
        ("tue", Weekday::Tue),
        ("wed", Weekday::Wed),
        ("thu", Weekday::Thu),
        ("fri", Weekday::Fri),
        ("sat", Weekday::Sat),
        ("sun", Weekday::Sun),
    ];
    let t = s.trim().to_ascii_lowercase();
    if let Ok(n) = t.parse::<usize>()
        && n < 7
    {
        return Ok(DAYS[n].1);
    }
    DAYS.iter()
        .find(|(name, _)| t.starts_with(name))
        .map(|(_, day)| *day)
        .ok_or_else(|| PhotocalError::config(format!("unknown weekday '{s}'")))
}

/// Parse a comma-separated weekday list; the empty string is an empty list.
pub fn parse_weekday_set(s: &str) -> PhotocalResult<Vec<Weekday>> {
    let t = s.trim();
    if t.is_empty() {
        return Ok(Vec::new());
    }
    t.split(',').map(parse_weekday).collect()
}

/// Resolve a locale tag like `da_DK`, `de-DE` or `en_US.UTF-8` to a chrono
/// locale used for all date formatting.
pub fn parse_locale(s: &str) -> PhotocalResult<Locale> {
    let tag = s.split('.').next().unwrap_or("").replace('-', "_");
    if tag.is_empty() || tag == "C" || tag == "POSIX" {
        return Ok(Locale::POSIX);
    }
    Locale::try_from(tag.as_str())
        .map_err(|_| PhotocalError::config(format!("unknown locale '{s}'")))
}

/// A foreground/background color pair for one month-grid cell state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StylePair {
    pub color: Rgba8,
    pub bg: Rgba8,
}

/// Date box parameters: three strftime patterns stacked vertically, with the
/// middle (day-of-month) band sized as a percentage of the box height.
#[derive(Clone, Debug)]
pub struct DateBoxOptions {
    pub top: String,
    pub middle: String,
    pub bottom: String,
    pub color: Rgba8,
    pub top_bottom_font: FontSpec,
    pub middle_font: FontSpec,
    pub middle_size: f64,
}

/// Event box parameters.
#[derive(Clone, Debug)]
pub struct EventBoxOptions {
    pub title: String,
    pub title_font: FontSpec,
    pub line_font: FontSpec,
    pub color: Rgba8,
    pub title_size: f64,
    pub range_days: u32,
}

/// Month grid parameters, including the per-state color table.
#[derive(Clone, Debug)]
pub struct MonthBoxOptions {
    pub first_day: Weekday,
    pub dayoff_weekdays: Vec<Weekday>,
    pub font: FontSpec,
    pub title: StylePair,
    pub title_border: Rgba8,
    pub othermonth: StylePair,
    pub today: StylePair,
    pub dayoff: StylePair,
    pub workday: StylePair,
    pub cell_border: Option<Rgba8>,
}

/// Simple date strip parameters: a large middle string with optional
/// flanking strings on the roomier axis.
#[derive(Clone, Debug)]
pub struct SimpleBoxOptions {
    pub middle: String,
    pub left: String,
    pub right: String,
    pub color: Rgba8,
    pub font: FontSpec,
}

/// The raw per-run settings, before orientation resolution. Fields that can
/// reasonably differ between a landscape and a portrait photo carry a
/// [`Dual`]; everything else is a plain value.
#[derive(Clone, Debug)]
pub struct PageSettings {
    pub size: Dual<PageSize>,
    /// Outer page margin, percent of page height.
    pub margin_outer: Dual<f64>,
    /// Margin between boxes (and photo band and content), percent of page height.
    pub margin_inner: Dual<f64>,
    pub format: Dual<PageFormat>,
    pub bgcolor: Dual<Rgba8>,
    /// Photo aspect ratio; the photo band height is page width / ratio.
    pub ratio: Dual<f64>,
    pub date: NaiveDate,
    pub locale: Locale,
    pub caption: Option<String>,
    pub caption_font: Dual<FontSpec>,
    pub caption_color: Dual<Rgba8>,
    pub datebox_top: Dual<String>,
    pub datebox_middle: Dual<String>,
    pub datebox_bottom: Dual<String>,
    pub datebox_middle_size: Dual<f64>,
    pub datebox_color: Rgba8,
    pub datebox_top_bottom_font: FontSpec,
    pub datebox_middle_font: FontSpec,
    pub eventbox_title: Dual<String>,
    pub eventbox_title_size: Dual<f64>,
    pub eventbox_range: u32,
    pub eventbox_title_font: FontSpec,
    pub eventbox_line_font: FontSpec,
    pub eventbox_color: Rgba8,
    pub monthbox: MonthBoxOptions,
    pub simplebox_middle: Dual<String>,
    pub simplebox_left: Dual<String>,
    pub simplebox_right: Dual<String>,
    pub simplebox_font: FontSpec,
    pub simplebox_color: Rgba8,
}

/// The frozen configuration a page render runs against. Margins are in
/// pixels here; every dual has been collapsed for the photo's orientation.
#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub page_w: u32,
    pub page_h: u32,
    pub margin_outer: f64,
    pub margin_inner: f64,
    pub format: PageFormat,
    pub bgcolor: Rgba8,
    pub ratio: f64,
    pub date: NaiveDate,
    pub locale: Locale,
    pub caption: Option<String>,
    pub caption_font: FontSpec,
    pub caption_color: Rgba8,
    pub datebox: DateBoxOptions,
    pub eventbox: EventBoxOptions,
    pub monthbox: MonthBoxOptions,
    pub simplebox: SimpleBoxOptions,
    /// Ascending by date; renderers consume this read-only.
    pub events: Vec<Event>,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            size: Dual::uniform(PageSize { w: 1200, h: 1050 }),
            margin_outer: Dual::uniform(4.5),
            margin_inner: Dual::uniform(2.25),
            format: Dual::uniform(PageFormat {
                photo_top: true,
                boxes: vec!['m', 'd', 'e'],
            }),
            bgcolor: Dual::uniform(Rgba8::opaque(0xde, 0xde, 0xde)),
            ratio: Dual {
                landscape: 1.5,
                portrait: 4.0 / 3.0,
            },
            date: NaiveDate::default(),
            locale: Locale::POSIX,
            caption: None,
            caption_font: Dual::uniform(FontSpec::named("Raleway-Regular")),
            caption_color: Dual::uniform(Rgba8::BLACK),
            datebox_top: Dual::uniform("%A".to_string()),
            datebox_middle: Dual::uniform("%e".to_string()),
            datebox_bottom: Dual::uniform("%B %Y".to_string()),
            datebox_middle_size: Dual::uniform(60.0),
            datebox_color: Rgba8::BLACK,
            datebox_top_bottom_font: FontSpec::named("Raleway-Regular"),
            datebox_middle_font: FontSpec::named("Raleway-Bold"),
            eventbox_title: Dual::uniform("%A:".to_string()),
            eventbox_title_size: Dual::uniform(10.0),
            eventbox_range: 14,
            eventbox_title_font: FontSpec::named("Raleway-Bold"),
            eventbox_line_font: FontSpec::named("Raleway-Regular"),
            eventbox_color: Rgba8::BLACK,
            monthbox: MonthBoxOptions::default(),
            simplebox_middle: Dual::uniform("%e".to_string()),
            simplebox_left: Dual::uniform("%a".to_string()),
            simplebox_right: Dual::uniform("%b".to_string()),
            simplebox_font: FontSpec::named("Raleway-Bold"),
            simplebox_color: Rgba8::BLACK,
        }
    }
}

impl Default for MonthBoxOptions {
    fn default() -> Self {
        Self {
            first_day: Weekday::Mon,
            dayoff_weekdays: vec![Weekday::Sun],
            font: FontSpec::named("Raleway-Bold"),
            title: StylePair {
                color: Rgba8::BLACK,
                bg: Rgba8::opaque(0xc8, 0xc8, 0xc8),
            },
            title_border: Rgba8::opaque(0x90, 0x90, 0x90),
            othermonth: StylePair {
                color: Rgba8::opaque(0x96, 0x96, 0x96),
                bg: Rgba8::opaque(0xf0, 0xf0, 0xf0),
            },
            today: StylePair {
                color: Rgba8::WHITE,
                bg: Rgba8::opaque(0xb2, 0x22, 0x22),
            },
            dayoff: StylePair {
                color: Rgba8::opaque(0xb2, 0x22, 0x22),
                bg: Rgba8::opaque(0xfa, 0xfa, 0xfa),
            },
            workday: StylePair {
                color: Rgba8::BLACK,
                bg: Rgba8::opaque(0xfa, 0xfa, 0xfa),
            },
            cell_border: None,
        }
    }
}

impl PageSettings {
    /// Collapse every dual value for the photo's orientation and convert
    /// percentage margins into pixels. This runs once per page, before any
    /// layout; the result is never re-resolved.
    pub fn resolve(
        &self,
        orientation: Orientation,
        mut events: Vec<Event>,
    ) -> PhotocalResult<ResolvedConfig> {
        let size = self.size.pick(orientation);
        let ratio = self.ratio.pick(orientation);
        if !(ratio.is_finite() && ratio > 0.0) {
            return Err(PhotocalError::config(format!(
                "ratio must be finite and > 0, got {ratio}"
            )));
        }
        let margin_pct = |name: &str, v: f64| -> PhotocalResult<f64> {
            if (0.0..50.0).contains(&v) {
                Ok(f64::from(size.h) * v / 100.0)
            } else {
                Err(PhotocalError::config(format!(
                    "{name} must be a percentage in 0..50, got {v}"
                )))
            }
        };
        let margin_outer = margin_pct("margin-outer", self.margin_outer.pick(orientation))?;
        let margin_inner = margin_pct("margin-inner", self.margin_inner.pick(orientation))?;

        // Stable by date, so equal-date events keep their file order.
        events.sort_by_key(|e| e.date);

        Ok(ResolvedConfig {
            page_w: size.w,
            page_h: size.h,
            margin_outer,
            margin_inner,
            format: self.format.pick(orientation),
            bgcolor: self.bgcolor.pick(orientation),
            ratio,
            date: self.date,
            locale: self.locale,
            caption: self.caption.clone(),
            caption_font: self.caption_font.pick(orientation),
            caption_color: self.caption_color.pick(orientation),
            datebox: DateBoxOptions {
                top: self.datebox_top.pick(orientation),
                middle: self.datebox_middle.pick(orientation),
                bottom: self.datebox_bottom.pick(orientation),
                color: self.datebox_color,
                top_bottom_font: self.datebox_top_bottom_font.clone(),
                middle_font: self.datebox_middle_font.clone(),
                middle_size: self.datebox_middle_size.pick(orientation),
            },
            eventbox: EventBoxOptions {
                title: self.eventbox_title.pick(orientation),
                title_font: self.eventbox_title_font.clone(),
                line_font: self.eventbox_line_font.clone(),
                color: self.eventbox_color,
                title_size: self.eventbox_title_size.pick(orientation),
                range_days: self.eventbox_range,
            },
            monthbox: self.monthbox.clone(),
            simplebox: SimpleBoxOptions {
                middle: self.simplebox_middle.pick(orientation),
                left: self.simplebox_left.pick(orientation),
                right: self.simplebox_right.pick(orientation),
                color: self.simplebox_color,
                font: self.simplebox_font.clone(),
            },
            events,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
