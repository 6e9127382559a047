fn main() {
    logsweep_lib::run()
}
