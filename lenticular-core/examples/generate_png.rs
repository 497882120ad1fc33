use lenticular::{Orientation, Settings, SourceImage, encode_png, interlace};

fn gradient(width: u32, height: u32, rgb: [u8; 3]) -> SourceImage {
    let mut data = Vec::with_capacity(width as usize * height as usize * 4);
    for y in 0..height {
        for x in 0..width {
            let shade = ((x + y) * 255 / (width + height - 2)) as u8;
            data.extend_from_slice(&[
                rgb[0].saturating_sub(shade / 2),
                rgb[1].saturating_sub(shade / 2),
                rgb[2].saturating_sub(shade / 2),
                255,
            ]);
        }
    }
    SourceImage::from_rgba8(width, height, data).expect("valid gradient buffer")
}

fn main() {
    if let Err(e) = try_main() {
        eprintln!("{e:?}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let sources = [
        gradient(480, 320, [220, 60, 60]),
        gradient(480, 320, [60, 60, 220]),
        gradient(480, 320, [60, 200, 90]),
    ];

    let settings = Settings {
        lines_per_unit: 75.0,
        base_resolution: 300.0,
        orientation: Orientation::Vertical,
    };
    let raster = interlace(&sources, &settings)?;
    let png = encode_png(&raster)?;

    let out_path = std::path::Path::new("target").join(lenticular::SUGGESTED_FILENAME);
    std::fs::create_dir_all("target")?;
    std::fs::write(&out_path, png)?;

    eprintln!("wrote {}", out_path.display());
    Ok(())
}
