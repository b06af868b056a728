use image::{imageops, DynamicImage};
use tract_onnx::prelude::*;

/// Scale the image to fit the target size, padding non-square images onto a
/// black square so the aspect ratio survives.
pub fn resize_image(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    if image.width() != image.height() {
        let (w, h) = (image.width() as f32, image.height() as f32);
        let scale = (width as f32 / w).min(height as f32 / h);
        let new_w = (w * scale) as u32;
        let new_h = (h * scale) as u32;

        let scaled = image.resize(new_w, new_h, imageops::FilterType::Triangle);

        let padded = DynamicImage::new_rgb8(width, height);
        let x_offset = (width - new_w) / 2;
        let y_offset = (height - new_h) / 2;

        let scaled_rgb = scaled.to_rgb8();
        let mut padded_rgb = padded.to_rgb8();

        let src_width = scaled_rgb.width();
        let src_height = scaled_rgb.height();

        for y in 0..new_h {
            for x in 0..new_w {
                if x < src_width && y < src_height {
                    let pixel = scaled_rgb.get_pixel(x, y);
                    padded_rgb.put_pixel(x + x_offset, y + y_offset, *pixel);
                }
            }
        }

        DynamicImage::from(padded_rgb)
    } else {
        image.resize_exact(width, height, imageops::FilterType::Triangle)
    }
}

fn image_to_tensor(
    image: &DynamicImage,
    normalize: Option<([f32; 3], [f32; 3])>,
) -> Result<Tensor, Box<dyn std::error::Error + Send + Sync>> {
    let rgb = image.to_rgb8();
    let mut tensor = Tensor::zero::<f32>(&[1, 3, rgb.height() as usize, rgb.width() as usize])?;

    for c in 0..3usize {
        for y in 0..rgb.height() {
            for x in 0..rgb.width() {
                let pixel = rgb.get_pixel(x, y);
                let mut value = pixel[c] as f32 / 255.0;
                if let Some((mean, std)) = normalize {
                    value = (value - mean[c]) / std[c];
                }
                let index = c * (rgb.height() * rgb.width()) as usize
                    + y as usize * rgb.width() as usize
                    + x as usize;
                tensor.as_slice_mut::<f32>()?[index] = value;
            }
        }
    }

    Ok(tensor)
}

/// Resize and convert to a [1, 3, H, W] tensor with pixels scaled to [0, 1].
pub fn resize_image_to_tensor(
    image: &DynamicImage,
    width: u32,
    height: u32,
) -> Result<Tensor, Box<dyn std::error::Error + Send + Sync>> {
    let resized = resize_image(image, width, height);
    image_to_tensor(&resized, None)
}

/// Same as [`resize_image_to_tensor`], but with per-channel mean/std
/// normalization applied after the [0, 1] scaling.
pub fn resize_image_to_tensor_normalized(
    image: &DynamicImage,
    width: u32,
    height: u32,
    mean: [f32; 3],
    std: [f32; 3],
) -> Result<Tensor, Box<dyn std::error::Error + Send + Sync>> {
    let resized = resize_image(image, width, height);
    image_to_tensor(&resized, Some((mean, std)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageBuffer, Rgb};

    #[test]
    fn test_image_to_tensor_square() {
        // Create a 100x100 red image
        let mut img = ImageBuffer::new(100, 100);
        for pixel in img.pixels_mut() {
            *pixel = Rgb([255, 0, 0]);
        }
        let image = DynamicImage::ImageRgb8(img);

        let tensor = resize_image_to_tensor(&image, 80, 80).unwrap();
        let shape = tensor.shape();
        assert_eq!(shape, &[1, 3, 80, 80]);

        let slice = tensor.as_slice::<f32>().unwrap();

        // First value in red channel should be 1.0 (255/255)
        assert_eq!(slice[0], 1.0);

        // First value in green channel should be 0.0
        assert_eq!(slice[80 * 80], 0.0);

        // First value in blue channel should be 0.0
        assert_eq!(slice[2 * 80 * 80], 0.0);
    }

    #[test]
    fn test_image_to_tensor_rectangle() {
        // Create a 200x100 red image
        let mut img = ImageBuffer::new(200, 100);
        for pixel in img.pixels_mut() {
            *pixel = Rgb([255, 0, 0]);
        }
        let image = DynamicImage::ImageRgb8(img);

        let tensor = resize_image_to_tensor(&image, 180, 180).unwrap();
        let shape = tensor.shape();
        assert_eq!(shape, &[1, 3, 180, 180]);

        // The scaled content is centered on the padded square
        let slice = tensor.as_slice::<f32>().unwrap();
        let center_x = 90;
        let center_y = 90;

        let index = center_y * 180 + center_x;
        assert_eq!(slice[index], 1.0); // Red channel at center
    }

    #[test]
    fn test_image_to_tensor_normalization() {
        // Create a 100x100 gray image (128, 128, 128)
        let mut img = ImageBuffer::new(100, 100);
        for pixel in img.pixels_mut() {
            *pixel = Rgb([128, 128, 128]);
        }
        let image = DynamicImage::ImageRgb8(img);

        let tensor = resize_image_to_tensor(&image, 80, 80).unwrap();
        let slice = tensor.as_slice::<f32>().unwrap();

        // Values are scaled to [0,1]
        let expected = 128.0 / 255.0;
        assert!((slice[0] - expected).abs() < 0.0001);
        assert!((slice[1] - expected).abs() < 0.0001);
        assert!((slice[2] - expected).abs() < 0.0001);
    }

    #[test]
    fn test_image_to_tensor_mean_std() {
        let mut img = ImageBuffer::new(100, 100);
        for pixel in img.pixels_mut() {
            *pixel = Rgb([128, 128, 128]);
        }
        let image = DynamicImage::ImageRgb8(img);

        let mean = [0.485, 0.456, 0.406];
        let std = [0.229, 0.224, 0.225];
        let tensor = resize_image_to_tensor_normalized(&image, 224, 224, mean, std).unwrap();
        let slice = tensor.as_slice::<f32>().unwrap();

        let expected = (128.0 / 255.0 - 0.485) / 0.229;
        assert!((slice[0] - expected).abs() < 0.0001);

        // Green channel uses its own mean/std
        let expected_green = (128.0 / 255.0 - 0.456) / 0.224;
        assert!((slice[224 * 224] - expected_green).abs() < 0.0001);
    }
}
