fn main() {
    dwarf::term::main();
}
