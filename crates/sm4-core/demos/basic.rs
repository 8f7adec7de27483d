//! Encrypts and decrypts the GB/T 32907-2016 example block.

use sm4_core::Sm4Cipher;

fn main() {
    let key: [u8; 16] = hex::decode("0123456789abcdeffedcba9876543210")
        .unwrap()
        .try_into()
        .unwrap();
    let cipher = Sm4Cipher::from(key);

    let mut ciphertext = [0u8; 16];
    cipher.encrypt(&mut ciphertext, &key);
    assert_eq!(hex::encode(ciphertext), "681edf34d206965e86b3e94f536e4246");

    let mut block = ciphertext;
    cipher.decrypt_in_place(&mut block);
    assert_eq!(block, key);

    println!("key:        {}", hex::encode(key));
    println!("ciphertext: {}", hex::encode(ciphertext));
    println!("example succeeded; output matches the published vector");
}
