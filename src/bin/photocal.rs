use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Parser;

use photocal::{
    Dual, FontSpec, MonthBoxOptions, PageFormat, PageSettings, PageSize, Photo, RasterCanvas,
    Rgba8, StylePair, default_registry, parse_locale, parse_weekday, parse_weekday_set,
    read_events_files, render_page,
};

/// Render one photo-calendar page as a PNG.
///
/// Options marked LAND~PORT accept either a single value used for both
/// orientations, or `LANDSCAPE~PORTRAIT` picked by the orientation of the
/// photo.
#[derive(Parser, Debug)]
#[command(name = "photocal", version)]
struct Cli {
    /// Photo to place on the page.
    photo: PathBuf,

    /// Output PNG path.
    #[arg(short, long, default_value = "calendar.png")]
    output: PathBuf,

    /// Date to render the page for, YYYY-MM-DD (default: today).
    #[arg(short, long)]
    date: Option<chrono::NaiveDate>,

    /// Event file; repeat to read several.
    #[arg(short, long)]
    event_file: Vec<PathBuf>,

    /// Locale for date texts, e.g. da_DK (default: $LANG).
    #[arg(long)]
    locale: Option<String>,

    /// Directory scanned (recursively) for fonts; repeat for several.
    #[arg(long)]
    font_dir: Vec<PathBuf>,

    /// Print the computed page geometry as JSON on stdout.
    #[arg(long)]
    dump_layout: bool,

    /// More logging; repeat for debug output.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Page size in pixels, WIDTHxHEIGHT (LAND~PORT).
    #[arg(long, default_value = "1200x1050")]
    size: Dual<PageSize>,

    /// Outer page margin in percent of page height (LAND~PORT).
    #[arg(long, default_value = "4.5")]
    margin_outer: Dual<f64>,

    /// Margin between boxes in percent of page height (LAND~PORT).
    #[arg(long, default_value = "2.25")]
    margin_inner: Dual<f64>,

    /// Page format: `t` or `b` for the photo position, then box letters
    /// (LAND~PORT).
    #[arg(short, long, default_value = "tmde")]
    format: Dual<PageFormat>,

    /// Page background color (LAND~PORT).
    #[arg(long, default_value = "#DEDEDE")]
    bgcolor: Dual<Rgba8>,

    /// Aspect ratio the photo band is cropped to (LAND~PORT).
    #[arg(short, long, default_value = "1.5~1.3333333")]
    ratio: Dual<f64>,

    /// Caption shown against the photo.
    #[arg(long)]
    caption: Option<String>,

    /// Caption font (LAND~PORT).
    #[arg(long, default_value = "Raleway-Regular")]
    caption_font: Dual<FontSpec>,

    /// Caption color (LAND~PORT).
    #[arg(long, default_value = "#000000")]
    caption_color: Dual<Rgba8>,

    /// Date pattern for the top strip of the date box (LAND~PORT).
    #[arg(long, default_value = "%A")]
    datebox_top: Dual<String>,

    /// Date pattern for the middle of the date box (LAND~PORT).
    #[arg(long, default_value = "%e")]
    datebox_middle: Dual<String>,

    /// Date pattern for the bottom strip of the date box (LAND~PORT).
    #[arg(long, default_value = "%B %Y")]
    datebox_bottom: Dual<String>,

    /// Height of the middle date-box band, percent of the box (LAND~PORT).
    #[arg(long, default_value = "60")]
    datebox_middle_size: Dual<f64>,

    /// Date box text color.
    #[arg(long, default_value = "#000000")]
    datebox_color: Rgba8,

    /// Font for the top and bottom date-box strips.
    #[arg(long, default_value = "Raleway-Regular")]
    datebox_font: FontSpec,

    /// Font for the middle date-box figure.
    #[arg(long, default_value = "Raleway-Bold")]
    datebox_middle_font: FontSpec,

    /// Date pattern for the event box title (LAND~PORT).
    #[arg(long, default_value = "%A:")]
    eventbox_title: Dual<String>,

    /// Height of one event line, percent of the box (LAND~PORT).
    #[arg(long, default_value = "10")]
    eventbox_title_size: Dual<f64>,

    /// Days ahead of the page date to list events for.
    #[arg(long, default_value_t = 14)]
    eventbox_range: u32,

    /// Font for the event box title.
    #[arg(long, default_value = "Raleway-Bold")]
    eventbox_title_font: FontSpec,

    /// Font for the event lines.
    #[arg(long, default_value = "Raleway-Regular")]
    eventbox_font: FontSpec,

    /// Event box text color.
    #[arg(long, default_value = "#000000")]
    eventbox_color: Rgba8,

    /// First weekday of the month grid (name or 0-6, 0 = Monday).
    #[arg(long, value_parser = parse_weekday, default_value = "monday")]
    monthbox_first_day: chrono::Weekday,

    /// Comma-separated weekdays always styled as days off.
    #[arg(long, default_value = "sunday")]
    monthbox_dayoff: String,

    /// Font for the month grid.
    #[arg(long, default_value = "Raleway-Bold")]
    monthbox_font: FontSpec,

    /// Weekday header text color.
    #[arg(long, default_value = "#000000")]
    monthbox_title_color: Rgba8,

    /// Weekday header background.
    #[arg(long, default_value = "#c8c8c8")]
    monthbox_title_bgcolor: Rgba8,

    /// Weekday header border color.
    #[arg(long, default_value = "#909090")]
    monthbox_title_border: Rgba8,

    /// Text color for days outside the month.
    #[arg(long, default_value = "#969696")]
    monthbox_othermonth_color: Rgba8,

    /// Background for days outside the month.
    #[arg(long, default_value = "#f0f0f0")]
    monthbox_othermonth_bgcolor: Rgba8,

    /// Text color for the page date itself.
    #[arg(long, default_value = "#ffffff")]
    monthbox_today_color: Rgba8,

    /// Background for the page date itself.
    #[arg(long, default_value = "#b22222")]
    monthbox_today_bgcolor: Rgba8,

    /// Text color for days off.
    #[arg(long, default_value = "#b22222")]
    monthbox_dayoff_color: Rgba8,

    /// Background for days off.
    #[arg(long, default_value = "#fafafa")]
    monthbox_dayoff_bgcolor: Rgba8,

    /// Text color for ordinary days.
    #[arg(long, default_value = "#000000")]
    monthbox_workday_color: Rgba8,

    /// Background for ordinary days.
    #[arg(long, default_value = "#fafafa")]
    monthbox_workday_bgcolor: Rgba8,

    /// Border color for day cells (default: no border).
    #[arg(long)]
    monthbox_cell_border: Option<Rgba8>,

    /// Date pattern for the middle of the simple box (LAND~PORT).
    #[arg(long, default_value = "%e")]
    simplebox_middle: Dual<String>,

    /// Date pattern for the left/top flank of the simple box (LAND~PORT).
    #[arg(long, default_value = "%a")]
    simplebox_left: Dual<String>,

    /// Date pattern for the right/bottom flank of the simple box (LAND~PORT).
    #[arg(long, default_value = "%b")]
    simplebox_right: Dual<String>,

    /// Font for the simple box.
    #[arg(long, default_value = "Raleway-Bold")]
    simplebox_font: FontSpec,

    /// Simple box text color.
    #[arg(long, default_value = "#000000")]
    simplebox_color: Rgba8,
}

/// Scanned when no `--font-dir` is given; missing directories are skipped.
const DEFAULT_FONT_DIRS: [&str; 4] = [
    "fonts",
    "/usr/share/fonts",
    "/usr/local/share/fonts",
    "/Library/Fonts",
];

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    let locale_tag = args
        .locale
        .clone()
        .or_else(|| std::env::var("LANG").ok())
        .unwrap_or_default();
    let locale = parse_locale(&locale_tag)?;
    let lang = locale_tag
        .split(['_', '-', '.'])
        .next()
        .unwrap_or("")
        .to_string();

    let photo = Photo::open(&args.photo)?;
    let events = read_events_files(&args.event_file, &lang)?;
    let settings = build_settings(&args, locale)?;
    let cfg = settings.resolve(photo.orientation(), events)?;

    let mut canvas = RasterCanvas::new(cfg.page_w, cfg.page_h)?;
    load_fonts(&mut canvas, &args.font_dir)?;

    let registry = default_registry();
    let plan = render_page(&mut canvas, &cfg, &registry, &photo)?;
    if args.dump_layout {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    }

    let page = canvas.into_page();
    if let Some(parent) = args.output.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        &args.output,
        &page.rgba,
        page.width,
        page.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.output.display()))?;

    eprintln!("wrote {}", args.output.display());
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_fonts(canvas: &mut RasterCanvas, dirs: &[PathBuf]) -> anyhow::Result<()> {
    let mut loaded = 0;
    if dirs.is_empty() {
        for dir in DEFAULT_FONT_DIRS {
            let dir = Path::new(dir);
            if dir.is_dir() {
                loaded += canvas.load_fonts_dir(dir)?;
            }
        }
    } else {
        for dir in dirs {
            loaded += canvas.load_fonts_dir(dir)?;
        }
    }
    if loaded == 0 {
        tracing::warn!("no fonts found; any text drawing will fail");
    }
    Ok(())
}

fn build_settings(args: &Cli, locale: chrono::Locale) -> anyhow::Result<PageSettings> {
    Ok(PageSettings {
        size: args.size.clone(),
        margin_outer: args.margin_outer.clone(),
        margin_inner: args.margin_inner.clone(),
        format: args.format.clone(),
        bgcolor: args.bgcolor.clone(),
        ratio: args.ratio.clone(),
        date: args
            .date
            .unwrap_or_else(|| chrono::Local::now().date_naive()),
        locale,
        caption: args.caption.clone(),
        caption_font: args.caption_font.clone(),
        caption_color: args.caption_color.clone(),
        datebox_top: args.datebox_top.clone(),
        datebox_middle: args.datebox_middle.clone(),
        datebox_bottom: args.datebox_bottom.clone(),
        datebox_middle_size: args.datebox_middle_size.clone(),
        datebox_color: args.datebox_color,
        datebox_top_bottom_font: args.datebox_font.clone(),
        datebox_middle_font: args.datebox_middle_font.clone(),
        eventbox_title: args.eventbox_title.clone(),
        eventbox_title_size: args.eventbox_title_size.clone(),
        eventbox_range: args.eventbox_range,
        eventbox_title_font: args.eventbox_title_font.clone(),
        eventbox_line_font: args.eventbox_font.clone(),
        eventbox_color: args.eventbox_color,
        monthbox: MonthBoxOptions {
            first_day: args.monthbox_first_day,
            dayoff_weekdays: parse_weekday_set(&args.monthbox_dayoff)?,
            font: args.monthbox_font.clone(),
            title: StylePair {
                color: args.monthbox_title_color,
                bg: args.monthbox_title_bgcolor,
            },
            title_border: args.monthbox_title_border,
            othermonth: StylePair {
                color: args.monthbox_othermonth_color,
                bg: args.monthbox_othermonth_bgcolor,
            },
            today: StylePair {
                color: args.monthbox_today_color,
                bg: args.monthbox_today_bgcolor,
            },
            dayoff: StylePair {
                color: args.monthbox_dayoff_color,
                bg: args.monthbox_dayoff_bgcolor,
            },
            workday: StylePair {
                color: args.monthbox_workday_color,
                bg: args.monthbox_workday_bgcolor,
            },
            cell_border: args.monthbox_cell_border,
        },
        simplebox_middle: args.simplebox_middle.clone(),
        simplebox_left: args.simplebox_left.clone(),
        simplebox_right: args.simplebox_right.clone(),
        simplebox_font: args.simplebox_font.clone(),
        simplebox_color: args.simplebox_color,
    })
}
