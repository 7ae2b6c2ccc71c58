use rastr_io::{read, write, Format, ImageBuffer, IoError};

fn gradient_rgb(width: u32, height: u32) -> ImageBuffer {
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            data.push((x * 8) as u8);
            data.push((y * 8) as u8);
            data.push(128);
        }
    }
    ImageBuffer::from_u8(width, height, 3, data).expect("valid buffer")
}

#[test]
fn png_roundtrip_rgb() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("rgb.png");

    let image = gradient_rgb(32, 24);
    write(&path, &image).expect("write png");

    let loaded = read(&path).expect("read png");
    assert_eq!(loaded.width, 32);
    assert_eq!(loaded.height, 24);
    assert_eq!(loaded.channels, 3);
    assert_eq!(loaded.data, image.data);
}

#[test]
fn png_roundtrip_rgba() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("rgba.png");

    let mut data = Vec::with_capacity(16 * 16 * 4);
    for y in 0..16u32 {
        for x in 0..16u32 {
            data.extend_from_slice(&[(x * 16) as u8, (y * 16) as u8, 64, 255]);
        }
    }
    let image = ImageBuffer::from_u8(16, 16, 4, data).expect("valid buffer");
    write(&path, &image).expect("write png");

    let loaded = read(&path).expect("read png");
    assert_eq!(loaded.channels, 4);
    assert_eq!(loaded.data, image.data);
}

#[test]
fn grayscale_png_expands_to_rgb() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("gray.png");

    let gray = ImageBuffer::from_u8(8, 8, 1, (0..64).map(|v| v as u8 * 4).collect())
        .expect("valid buffer");
    write(&path, &gray).expect("write gray png");

    let loaded = read(&path).expect("read gray png");
    assert_eq!(loaded.channels, 3);
    for (px, &g) in loaded.data.chunks(3).zip(gray.data.iter()) {
        assert_eq!(px, &[g, g, g]);
    }
}

#[test]
fn read_detects_format_by_magic_despite_extension() {
    let dir = tempfile::tempdir().expect("tempdir");
    // PNG bytes behind a .jpg name; magic sniffing must win
    let path = dir.path().join("mislabeled.jpg");

    let image = gradient_rgb(4, 4);
    rastr_io::png::write(&path, &image).expect("write png bytes");

    assert_eq!(Format::detect(&path).expect("detect"), Format::Png);
    let loaded = read(&path).expect("read mislabeled png");
    assert_eq!(loaded.data, image.data);
}

#[test]
fn read_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let result = read(dir.path().join("no_such_file.png"));
    assert!(result.is_err());
}

#[test]
fn write_rejects_non_png_extension() {
    let dir = tempfile::tempdir().expect("tempdir");
    let image = gradient_rgb(4, 4);
    let result = write(dir.path().join("out.jpg"), &image);
    assert!(matches!(result, Err(IoError::UnsupportedFormat(_))));
}
