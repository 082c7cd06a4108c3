use rand::distributions::Alphanumeric;
use rand::Rng;

pub fn sequential_key(i: u64) -> String {
    format!("key{}", i)
}

pub fn sequential_value(iteration: u64) -> String {
    format!("value{}", iteration)
}

pub fn verify_key(i: u64) -> String {
    format!("test_key_{}", i)
}

pub fn verify_value(i: u64) -> String {
    format!("test_value_{}", i)
}

pub fn random_string<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}
