// Property tests for image decoding
// Author: kelexine (https://github.com/kelexine)

use base64::Engine;
use fridge_chef::vision::decode_image;
use proptest::prelude::*;

proptest! {
    #[test]
    fn data_url_round_trips_mime_and_bytes(
        bytes in proptest::collection::vec(any::<u8>(), 0..512),
        kind in "(image|application)",
        subtype in "[a-z][a-z0-9.+-]{0,15}",
    ) {
        let mime = format!("{}/{}", kind, subtype);
        let payload = base64::engine::general_purpose::STANDARD.encode(&bytes);
        let image = decode_image(&format!("data:{};base64,{}", mime, payload)).unwrap();

        prop_assert_eq!(image.mime_type, mime);
        prop_assert_eq!(image.data, bytes);
    }

    #[test]
    fn plain_base64_defaults_to_jpeg(bytes in proptest::collection::vec(any::<u8>(), 1..512)) {
        let payload = base64::engine::general_purpose::STANDARD.encode(&bytes);
        let image = decode_image(&payload).unwrap();

        prop_assert_eq!(image.mime_type, "image/jpeg");
        prop_assert_eq!(image.data, bytes);
    }

    #[test]
    fn doubled_prefix_is_collapsed(subtype in "[a-z]{1,10}") {
        let image = decode_image(&format!("data:image/image/{};base64,c2FtcGxl", subtype)).unwrap();
        prop_assert_eq!(image.mime_type, format!("image/{}", subtype));
    }

    #[test]
    fn arbitrary_input_never_panics(input in ".{0,256}") {
        let _ = decode_image(&input);
        let _ = decode_image(&format!("data:{}", input));
    }
}
