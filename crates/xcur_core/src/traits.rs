use crate::types::DecodedImage;

/// Destination for decoded cursor images.
///
/// Decoding never depends on a concrete sink; callers pick one (a report
/// writer, an asset emitter) and hand it the result of [`decode`](crate::decode).
pub trait ImageSink {
    type Error;

    fn emit(&mut self, image: &DecodedImage) -> Result<(), Self::Error>;
}

impl<S: ImageSink + ?Sized> ImageSink for &mut S {
    type Error = S::Error;

    fn emit(&mut self, image: &DecodedImage) -> Result<(), Self::Error> {
        (**self).emit(image)
    }
}
