use iai::black_box;

use des::Engine;

fn iai_des_key_schedule() -> Engine {
    Engine::new(black_box(0x133457799BBCDFF1))
}

fn iai_des_encrypt() -> u64 {
    let engine = Engine::new(black_box(0x133457799BBCDFF1));
    engine.encrypt(black_box(0x0123456789ABCDEF))
}

fn iai_des_decrypt() -> u64 {
    let engine = Engine::new(black_box(0x133457799BBCDFF1));
    engine.decrypt(black_box(0x85E813540F0AB405))
}

iai::main!(iai_des_key_schedule, iai_des_encrypt, iai_des_decrypt);
