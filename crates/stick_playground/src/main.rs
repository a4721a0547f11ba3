fn main() {
    stick_playground::run();
}
