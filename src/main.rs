fn main() {
    carenet_lib::run()
}
