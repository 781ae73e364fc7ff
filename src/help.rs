pub(crate) fn print_version() {
    println!("lp (lazy pipe) - {} - {}", env!("CARGO_PKG_VERSION"), env!("BUILD_TIME"));
}

const GENERAL: &str = "\
用法：lp [<options>] [<input_cmd>] [<op_cmd>...] [<output_cmd>]
    按需逐个拉取数据：只有输出命令需要时才会从输入读取下一个值。";

const OPTIONS: &str = "\
<options> 选项：
    -V,--version    打印版本信息。
    -h,--help       打印帮助信息。
                    -h|--help[ options|input|op|output|cond|code]
    -v,--verbose    执行之前打印流水线详情，并输出调试日志。
                    日志级别也可以通过环境变量`LP_LOG`指定。
    -d,--dry-run    仅解析流水线，不执行。";

const INPUT: &str = "\
<input_cmd> 数据输入命令：
    :in         从标准输入读取，未指定输入时的默认输入。
    :file       逐个读取文件的每一行。
                :file <file_name>...
    :of         直接字面值。
                :of <text>...
    :range      整数范围，不包含结束值，步长可以为负数。
                :range <start>,<end>[,<step>]
                例如：
                    :range 0,10
                    :range 10,0,-2
    :gen        无限递增的整数。
                :gen <start>[,<step>]
    :repeat     重复给定的值，未指定次数时无限重复。
                :repeat <text>[ <count>]";

const OP: &str = "\
<op_cmd> 数据操作命令：
    :upper      转为大写。
    :lower      转为小写。
    :replace    替换字符串。
                :replace <from> <to>[ <count>]
    :index      在每个值之前加上从0开始的序号和制表符。
    :filter     保留满足条件的数据。
                :filter <condition>
    :reject     丢弃满足条件的数据。
                :reject <condition>
    :take       最多保留前<n>个数据，之后不再读取输入。
                :take <n>
    :drop       丢弃前<n>个数据。
                :drop <n>
    :chars      把每个值拆分为单个字符。
    :split      按分隔符拆分每个值。
                :split <sep>";

const OUTPUT: &str = "\
<output_cmd> 数据输出命令：
    :to out     输出到标准输出，未指定输出时的默认输出。
    :to file    输出到文件。
                :to file <file_name>[ append][ lf|crlf]
    :find       输出第一个满足条件的值，未指定条件时输出第一个值。
                :find[ <condition>]
    :some       输出是否存在满足条件的值。
                :some[ <condition>]
    :every      输出是否所有值都满足条件，没有任何值时为true。
                :every[ <condition>]";

const CONDITION: &str = "\
<condition> 条件表达式，可以用`not`前缀取反：
    len <min>,<max>     按照字符串长度范围选择，最小值和最大值至少指定其一。
    len =<len>          按照字符串特定长度选择。
    num <min>,<max>     按照数值范围选择，无法解析为数时不选择。
    num =<spec>         按照数值特定值选择。
    num[ integer|float] 选择整数、浮点数或任意数值。
    upper|lower         选择不包含小写或大写字符的数据。
    empty|blank         选择没有任何字符或全部为空白字符的数据。
    reg <exp>           选择整体匹配给定正则表达式的数据。
    例如：
        :filter len 2,5
        :filter not num integer
        :every reg '\\d+'";

const CODE: &str = "\
命令退出码：
    10  读取数据失败。
    11  转换或条件执行失败。
    12  中止。
    20  参数解析失败。
    21  参数值非法。
    22  缺少参数。
    23  未知参数。
    24  正则表达式非法。
    30  打开文件失败。
    31  读取文件失败。
    32  读取标准输入失败。
    33  写出失败。";

pub(crate) fn print_help(topic: Option<String>) {
    print_version();
    println!("\n{}\n\n{}", env!("CARGO_PKG_DESCRIPTION"), GENERAL);
    let sections: &[&str] = match topic.map(|topic| topic.to_ascii_lowercase()).as_deref() {
        Some("opt" | "options") => &[OPTIONS],
        Some("in" | "input") => &[INPUT],
        Some("op") => &[OP],
        Some("out" | "output") => &[OUTPUT],
        Some("cond" | "condition") => &[CONDITION],
        Some("code") => &[CODE],
        _ => &[OPTIONS, INPUT, OP, OUTPUT, CONDITION, CODE],
    };
    for section in sections {
        println!("\n{section}");
    }
}
