//! Built-in curriculum: the full leveled lesson table.
//!
//! Hand-authored content, not logic. Lessons are English vocabulary and
//! grammar explained in Vietnamese, tagged by CEFR level and listed in
//! teaching order. "Rương" (treasure chest) and "THỬ THÁCH" (challenge)
//! entries are review checkpoints and carry no vocabulary or grammar.
//!
//! `level` stays a plain tag here and is parsed when the catalog is built,
//! so a typo in this table aborts startup instead of dropping a lesson.

/// Static definition of one lesson.
#[derive(Clone, Copy)]
pub struct LessonDef {
  pub id: u32,
  pub level: &'static str,
  pub topic: &'static str,
  pub vocabulary: &'static [VocabDef],
  pub grammar: &'static [RuleDef],
}

#[derive(Clone, Copy)]
pub struct VocabDef {
  pub word: &'static str,
  pub kind: &'static str,
  pub meaning: &'static str,
}

#[derive(Clone, Copy)]
pub struct RuleDef {
  pub name: &'static str,
  pub form: &'static str,
  pub usage: &'static str,
  pub example: &'static str,
}

macro_rules! v {
  ($word:expr, $kind:expr, $meaning:expr) => {
    VocabDef { word: $word, kind: $kind, meaning: $meaning }
  };
}

macro_rules! g {
  ($name:expr, $form:expr, $usage:expr, $example:expr) => {
    RuleDef { name: $name, form: $form, usage: $usage, example: $example }
  };
}

macro_rules! chest {
  ($id:expr, $level:expr, $topic:expr) => {
    LessonDef { id: $id, level: $level, topic: $topic, vocabulary: &[], grammar: &[] }
  };
}

pub const LESSONS: &[LessonDef] = &[
  // ---------------- A1 ----------------
  LessonDef {
    id: 1,
    level: "A1",
    topic: "Chào hỏi & Giới thiệu",
    vocabulary: &[
      v!("Hello", "Exclamation", "xin chào"),
      v!("Hi", "Exclamation", "chào (thân mật)"),
      v!("Good morning", "Phrase", "chào buổi sáng"),
      v!("Good afternoon", "Phrase", "chào buổi chiều"),
      v!("Good evening", "Phrase", "chào buổi tối"),
      v!("Goodbye", "Exclamation", "tạm biệt"),
      v!("Name", "N/V", "tên; đặt tên"),
      v!("Meet", "Verb", "gặp, gặp gỡ"),
      v!("Nice", "Adjective", "vui, dễ chịu"),
      v!("Introduce", "Verb", "giới thiệu"),
      v!("Friend", "Noun", "bạn, bạn bè"),
      v!("Teacher", "Noun", "giáo viên"),
      v!("Student", "Noun", "học sinh, sinh viên"),
      v!("Country", "Noun", "đất nước, quốc gia"),
      v!("From", "Preposition", "từ, đến từ"),
      v!("Age", "Noun", "tuổi"),
      v!("Job", "Noun", "nghề nghiệp, công việc"),
      v!("Live", "Verb", "sống, cư trú"),
      v!("Welcome", "N/V", "sự chào đón; chào mừng"),
      v!("ID", "Acronym", "giấy tờ tùy thân (identification)"),
    ],
    grammar: &[
      g!(
        "Động từ \"to be\"",
        "S + am/is/are + N/Adj",
        "Dùng để giới thiệu tên, nghề nghiệp, quốc tịch.",
        "I am a student."
      ),
      g!(
        "Đại từ nhân xưng",
        "I / you / he / she / it / we / they",
        "Chủ ngữ đứng đầu câu và quyết định dạng của động từ.",
        "She is my teacher."
      ),
      g!(
        "Tính từ sở hữu",
        "my / your / his / her + N",
        "Đứng trước danh từ để chỉ sự sở hữu.",
        "My name is Lan."
      ),
      g!(
        "Câu hỏi với What / Where",
        "What/Where + am/is/are + S?",
        "Hỏi tên, nghề nghiệp và nơi ở.",
        "Where are you from?"
      ),
      g!(
        "Giới thiệu bản thân",
        "My name is… / I am from…",
        "Mẫu câu tự giới thiệu khi gặp lần đầu.",
        "My name is Minh. I am from Viet Nam."
      ),
    ],
  },
  LessonDef {
    id: 2,
    level: "A1",
    topic: "Gia đình & Bạn bè",
    vocabulary: &[
      v!("Family", "Noun", "gia đình"),
      v!("Father", "Noun", "bố, cha"),
      v!("Mother", "Noun", "mẹ"),
      v!("Brother", "Noun", "anh trai, em trai"),
      v!("Sister", "Noun", "chị gái, em gái"),
      v!("Parents", "Noun", "bố mẹ"),
      v!("Love", "N/V", "tình yêu; yêu thương"),
      v!("Together", "Adverb", "cùng nhau"),
    ],
    grammar: &[
      g!(
        "Sở hữu cách với 's",
        "N + 's + N",
        "Chỉ quan hệ sở hữu giữa người với người hoặc vật.",
        "This is my father's car."
      ),
      g!(
        "Have / Has",
        "S + have/has + N",
        "Diễn tả sự sở hữu; \"has\" đi với ngôi thứ ba số ít.",
        "She has two brothers."
      ),
    ],
  },
  chest!(3, "A1", "Rương A1/1"),
  LessonDef {
    id: 4,
    level: "A1",
    topic: "Số đếm, Ngày tháng & Thời gian",
    vocabulary: &[
      v!("One", "Number", "một"),
      v!("Ten", "Number", "mười"),
      v!("Hundred", "Number", "trăm"),
      v!("Monday", "Noun", "thứ Hai"),
      v!("Sunday", "Noun", "chủ Nhật"),
      v!("Today", "Adverb", "hôm nay"),
      v!("Tomorrow", "Adverb", "ngày mai"),
      v!("O'clock", "Adverb", "giờ (đúng)"),
    ],
    grammar: &[
      g!(
        "Hỏi giờ",
        "What time is it?",
        "Hỏi và trả lời về giờ giấc.",
        "What time is it? It's seven o'clock."
      ),
      g!(
        "Giới từ thời gian",
        "at / on / in + thời gian",
        "\"at\" cho giờ, \"on\" cho thứ và ngày, \"in\" cho tháng và năm.",
        "School starts at eight on Monday."
      ),
    ],
  },
  LessonDef {
    id: 5,
    level: "A1",
    topic: "Đồ ăn & Thức uống",
    vocabulary: &[
      v!("Rice", "Noun", "cơm, gạo"),
      v!("Water", "Noun", "nước"),
      v!("Coffee", "Noun", "cà phê"),
      v!("Tea", "Noun", "trà"),
      v!("Bread", "Noun", "bánh mì"),
      v!("Eat", "Verb", "ăn"),
      v!("Hungry", "Adjective", "đói"),
      v!("Thirsty", "Adjective", "khát"),
      v!("Delicious", "Adjective", "ngon"),
    ],
    grammar: &[
      g!(
        "Would like",
        "S + would like + N / to V",
        "Cách gọi món và đề nghị lịch sự.",
        "I would like a cup of tea."
      ),
      g!(
        "Some / Any",
        "some + N (khẳng định), any + N (phủ định, nghi vấn)",
        "Dùng với danh từ không đếm được và danh từ số nhiều.",
        "Is there any water?"
      ),
    ],
  },
  LessonDef {
    id: 6,
    level: "A1",
    topic: "Trường học & Lớp học",
    vocabulary: &[
      v!("School", "Noun", "trường học"),
      v!("Classroom", "Noun", "lớp học"),
      v!("Book", "Noun", "sách"),
      v!("Pen", "Noun", "bút"),
      v!("Homework", "Noun", "bài tập về nhà"),
      v!("Question", "N/V", "câu hỏi; hỏi"),
      v!("Answer", "N/V", "câu trả lời; trả lời"),
      v!("Learn", "Verb", "học, tiếp thu"),
    ],
    grammar: &[
      g!(
        "Câu mệnh lệnh",
        "V + O! / Don't + V!",
        "Yêu cầu và nhắc nhở trong lớp học.",
        "Open your book, please."
      ),
      g!(
        "There is / There are",
        "There is + N (số ít) / There are + N (số nhiều)",
        "Nói về sự tồn tại của người hoặc vật.",
        "There are twenty desks in the classroom."
      ),
    ],
  },
  chest!(7, "A1", "Rương A1/2"),
  // ---------------- A2 ----------------
  LessonDef {
    id: 8,
    level: "A2",
    topic: "Mua sắm & Giá cả",
    vocabulary: &[
      v!("Market", "Noun", "chợ, thị trường"),
      v!("Price", "Noun", "giá"),
      v!("Cheap", "Adjective", "rẻ"),
      v!("Expensive", "Adjective", "đắt"),
      v!("Discount", "N/V", "sự giảm giá; giảm giá"),
      v!("Pay", "Verb", "trả tiền"),
      v!("Cash", "Noun", "tiền mặt"),
      v!("ATM", "Acronym", "máy rút tiền tự động"),
    ],
    grammar: &[
      g!(
        "How much / How many",
        "How much + N (không đếm được) / How many + N (đếm được)?",
        "Hỏi giá và số lượng khi mua hàng.",
        "How much is this shirt?"
      ),
      g!(
        "So sánh hơn",
        "Adj-er + than / more + Adj + than",
        "So sánh giá và chất lượng giữa hai món hàng.",
        "This bag is cheaper than that one."
      ),
    ],
  },
  LessonDef {
    id: 9,
    level: "A2",
    topic: "Phương tiện & Chỉ đường",
    vocabulary: &[
      v!("Bus", "Noun", "xe buýt"),
      v!("Train", "Noun", "tàu hỏa"),
      v!("Ticket", "Noun", "vé"),
      v!("Street", "Noun", "đường phố"),
      v!("Turn", "N/V", "lượt; rẽ"),
      v!("Straight", "Adverb", "thẳng"),
      v!("Map", "Noun", "bản đồ"),
      v!("Far", "Adjective", "xa"),
    ],
    grammar: &[
      g!(
        "Chỉ đường",
        "Turn left/right + at + N",
        "Mẫu câu chỉ đường cơ bản.",
        "Turn left at the traffic lights."
      ),
      g!(
        "How long / How far",
        "How long/far + does it take / is it?",
        "Hỏi khoảng cách và thời gian di chuyển.",
        "How far is it to the station?"
      ),
    ],
  },
  chest!(10, "A2", "Rương A2/1"),
  LessonDef {
    id: 11,
    level: "A2",
    topic: "Sức khỏe & Cơ thể",
    vocabulary: &[
      v!("Head", "Noun", "đầu"),
      v!("Stomach", "Noun", "bụng, dạ dày"),
      v!("Medicine", "Noun", "thuốc"),
      v!("Doctor", "Noun", "bác sĩ"),
      v!("Sick", "Adjective", "ốm, bệnh"),
      v!("Tired", "Adjective", "mệt"),
      v!("Hurt", "N/V", "vết đau; làm đau"),
      v!("Rest", "N/V", "sự nghỉ ngơi; nghỉ ngơi"),
    ],
    grammar: &[
      g!(
        "Should / Shouldn't",
        "S + should/shouldn't + V",
        "Đưa ra lời khuyên về sức khỏe.",
        "You should drink more water."
      ),
      g!(
        "Hỏi thăm sức khỏe",
        "What's the matter? / How do you feel?",
        "Hỏi han khi ai đó không khỏe.",
        "What's the matter? I have a headache."
      ),
    ],
  },
  LessonDef {
    id: 12,
    level: "A2",
    topic: "Thời tiết & Mùa",
    vocabulary: &[
      v!("Weather", "Noun", "thời tiết"),
      v!("Rain", "N/V", "mưa; đổ mưa"),
      v!("Sunny", "Adjective", "nắng"),
      v!("Cloudy", "Adjective", "nhiều mây"),
      v!("Season", "Noun", "mùa"),
      v!("Summer", "Noun", "mùa hè"),
      v!("Winter", "Noun", "mùa đông"),
      v!("Forecast", "N/V", "dự báo; dự đoán"),
    ],
    grammar: &[
      g!(
        "Chủ ngữ giả \"it\"",
        "It + is + Adj / It + V-s",
        "Nói về thời tiết với chủ ngữ \"it\".",
        "It is rainy in Ha Noi today."
      ),
      g!(
        "Thì hiện tại tiếp diễn",
        "S + am/is/are + V-ing",
        "Diễn tả hành động đang diễn ra, kể cả thời tiết.",
        "Look! It is raining."
      ),
    ],
  },
  LessonDef {
    id: 13,
    level: "A2",
    topic: "Công việc & Nghề nghiệp",
    vocabulary: &[
      v!("Office", "Noun", "văn phòng"),
      v!("Meeting", "Noun", "cuộc họp"),
      v!("Salary", "Noun", "tiền lương"),
      v!("Boss", "Noun", "sếp, cấp trên"),
      v!("Engineer", "Noun", "kỹ sư"),
      v!("Nurse", "Noun", "y tá"),
      v!("Work", "N/V", "công việc; làm việc"),
      v!("CV", "Acronym", "sơ yếu lý lịch (curriculum vitae)"),
    ],
    grammar: &[
      g!(
        "Thì hiện tại đơn",
        "S + V(-s/-es)",
        "Diễn tả công việc hằng ngày và thói quen.",
        "She works in a bank."
      ),
      g!(
        "Trạng từ tần suất",
        "always / usually / often / sometimes / never",
        "Đứng trước động từ thường để nói mức độ thường xuyên.",
        "I usually start work at eight."
      ),
    ],
  },
  chest!(14, "A2", "Rương A2/2"),
  chest!(15, "A2", "THỬ THÁCH A1-A2"),
  // ---------------- B1 ----------------
  LessonDef {
    id: 16,
    level: "B1",
    topic: "Du lịch & Kỳ nghỉ",
    vocabulary: &[
      v!("Passport", "Noun", "hộ chiếu"),
      v!("Luggage", "Noun", "hành lý"),
      v!("Flight", "Noun", "chuyến bay"),
      v!("Hotel", "Noun", "khách sạn"),
      v!("Book", "Verb", "đặt (phòng, vé)"),
      v!("Sightseeing", "Noun", "việc tham quan"),
      v!("Souvenir", "Noun", "quà lưu niệm"),
      v!("Abroad", "Adverb", "ở nước ngoài"),
    ],
    grammar: &[
      g!(
        "Thì hiện tại hoàn thành",
        "S + have/has + V3",
        "Nói về trải nghiệm đã có tính đến hiện tại.",
        "I have visited Da Nang twice."
      ),
      g!(
        "Be going to",
        "S + am/is/are + going to + V",
        "Kế hoạch đã định trước cho kỳ nghỉ.",
        "We are going to stay in Hoi An."
      ),
    ],
  },
  LessonDef {
    id: 17,
    level: "B1",
    topic: "Kể chuyện quá khứ",
    vocabulary: &[
      v!("Yesterday", "Adverb", "hôm qua"),
      v!("Suddenly", "Adverb", "đột nhiên"),
      v!("Happen", "Verb", "xảy ra"),
      v!("Remember", "Verb", "nhớ, ghi nhớ"),
      v!("Forget", "Verb", "quên"),
      v!("Story", "Noun", "câu chuyện"),
      v!("Ago", "Adverb", "cách đây"),
      v!("Childhood", "Noun", "thời thơ ấu"),
    ],
    grammar: &[
      g!(
        "Thì quá khứ đơn",
        "S + V2/V-ed",
        "Kể lại sự việc đã kết thúc trong quá khứ.",
        "Last year I moved to Ha Noi."
      ),
      g!(
        "Thì quá khứ tiếp diễn",
        "S + was/were + V-ing",
        "Hành động đang diễn ra thì bị hành động khác xen vào.",
        "I was cooking when the phone rang."
      ),
    ],
  },
  chest!(18, "B1", "Rương B1/1"),
  LessonDef {
    id: 19,
    level: "B1",
    topic: "Sở thích & Giải trí",
    vocabulary: &[
      v!("Hobby", "Noun", "sở thích"),
      v!("Movie", "Noun", "phim"),
      v!("Music", "Noun", "âm nhạc"),
      v!("Concert", "Noun", "buổi hòa nhạc"),
      v!("Collect", "Verb", "sưu tầm"),
      v!("Relax", "Verb", "thư giãn"),
      v!("Fun", "N/Adj", "niềm vui; vui"),
      v!("Free time", "Phrase", "thời gian rảnh"),
    ],
    grammar: &[
      g!(
        "V-ing sau động từ chỉ sở thích",
        "like/love/enjoy + V-ing",
        "Sau like, love, enjoy, hate dùng danh động từ.",
        "She enjoys playing the guitar."
      ),
      g!(
        "Rủ rê, gợi ý",
        "Let's + V / Why don't we + V?",
        "Đề nghị cùng làm gì trong thời gian rảnh.",
        "Why don't we go to the cinema tonight?"
      ),
    ],
  },
  LessonDef {
    id: 20,
    level: "B1",
    topic: "Công nghệ & Mạng xã hội",
    vocabulary: &[
      v!("Smartphone", "Noun", "điện thoại thông minh"),
      v!("Download", "N/V", "bản tải xuống; tải xuống"),
      v!("Upload", "N/V", "bản tải lên; tải lên"),
      v!("Password", "Noun", "mật khẩu"),
      v!("Account", "Noun", "tài khoản"),
      v!("Wi-Fi", "Acronym", "mạng không dây"),
      v!("Online", "Adjective", "trực tuyến"),
      v!("Share", "Verb", "chia sẻ"),
    ],
    grammar: &[
      g!(
        "Câu bị động",
        "S + am/is/are + V3 (+ by O)",
        "Nhấn mạnh sự việc thay vì người thực hiện.",
        "The photo was shared by thousands of people."
      ),
      g!(
        "Mệnh đề quan hệ",
        "N + who/which/that + mệnh đề",
        "Bổ nghĩa cho danh từ đứng trước.",
        "The app that I downloaded is free."
      ),
    ],
  },
  LessonDef {
    id: 21,
    level: "B1",
    topic: "Môi trường & Thiên nhiên",
    vocabulary: &[
      v!("Environment", "Noun", "môi trường"),
      v!("Pollution", "Noun", "sự ô nhiễm"),
      v!("Recycle", "Verb", "tái chế"),
      v!("Forest", "Noun", "rừng"),
      v!("Plastic", "N/Adj", "nhựa; bằng nhựa"),
      v!("Protect", "Verb", "bảo vệ"),
      v!("Wildlife", "Noun", "động vật hoang dã"),
      v!("Climate", "Noun", "khí hậu"),
    ],
    grammar: &[
      g!(
        "Câu điều kiện loại 1",
        "If + S + V (hiện tại), S + will + V",
        "Điều kiện có thật ở tương lai.",
        "If we recycle more, we will save energy."
      ),
      g!(
        "Danh từ không đếm được",
        "much/little + N",
        "Pollution, water, energy không dùng mạo từ \"a\".",
        "There is too much plastic in the ocean."
      ),
    ],
  },
  chest!(22, "B1", "THỬ THÁCH B1"),
  // ---------------- B2 ----------------
  LessonDef {
    id: 23,
    level: "B2",
    topic: "Giáo dục & Học tập",
    vocabulary: &[
      v!("University", "Noun", "trường đại học"),
      v!("Degree", "Noun", "bằng cấp"),
      v!("Scholarship", "Noun", "học bổng"),
      v!("Research", "N/V", "việc nghiên cứu; nghiên cứu"),
      v!("Exam", "Noun", "kỳ thi"),
      v!("Knowledge", "Noun", "kiến thức"),
      v!("Graduate", "N/V", "cử nhân; tốt nghiệp"),
      v!("Curriculum", "Noun", "chương trình học"),
    ],
    grammar: &[
      g!(
        "Câu điều kiện loại 2",
        "If + S + V2, S + would + V",
        "Giả định trái với hiện tại.",
        "If I had more time, I would learn French."
      ),
      g!(
        "Câu tường thuật",
        "S + said (that) + mệnh đề lùi thì",
        "Thuật lại lời nói của người khác.",
        "She said that the exam was difficult."
      ),
    ],
  },
  LessonDef {
    id: 24,
    level: "B2",
    topic: "Tin tức & Truyền thông",
    vocabulary: &[
      v!("Headline", "Noun", "tiêu đề báo"),
      v!("Journalist", "Noun", "nhà báo"),
      v!("Interview", "N/V", "cuộc phỏng vấn; phỏng vấn"),
      v!("Broadcast", "N/V", "buổi phát sóng; phát sóng"),
      v!("Source", "Noun", "nguồn tin"),
      v!("Reliable", "Adjective", "đáng tin cậy"),
      v!("Fake news", "Phrase", "tin giả"),
      v!("Audience", "Noun", "khán giả"),
    ],
    grammar: &[
      g!(
        "Bị động với động từ tường thuật",
        "It is said/reported that + mệnh đề",
        "Đưa tin khi không nêu rõ nguồn.",
        "It is reported that the storm will reach the coast tonight."
      ),
      g!(
        "Mạo từ với tên tổ chức",
        "the + tên báo / tổ chức",
        "Tên tờ báo và tổ chức thường đi với \"the\".",
        "She works for the BBC."
      ),
    ],
  },
  chest!(25, "B2", "Rương B2/1"),
  LessonDef {
    id: 26,
    level: "B2",
    topic: "Kinh doanh & Tiền bạc",
    vocabulary: &[
      v!("Company", "Noun", "công ty"),
      v!("Profit", "Noun", "lợi nhuận"),
      v!("Invest", "Verb", "đầu tư"),
      v!("Budget", "N/V", "ngân sách; dự trù kinh phí"),
      v!("Contract", "Noun", "hợp đồng"),
      v!("Negotiate", "Verb", "đàm phán"),
      v!("Customer", "Noun", "khách hàng"),
      v!("CEO", "Acronym", "giám đốc điều hành"),
    ],
    grammar: &[
      g!(
        "Thì hiện tại hoàn thành tiếp diễn",
        "S + have/has been + V-ing",
        "Hành động bắt đầu trong quá khứ và còn kéo dài.",
        "The company has been growing since 2020."
      ),
      g!(
        "Động từ đi với giới từ",
        "invest in / pay for / deal with",
        "Nhiều động từ kinh doanh đi với giới từ cố định.",
        "They invested in a new factory."
      ),
    ],
  },
  LessonDef {
    id: 27,
    level: "B2",
    topic: "Văn hóa & Lễ hội",
    vocabulary: &[
      v!("Festival", "Noun", "lễ hội"),
      v!("Tradition", "Noun", "truyền thống"),
      v!("Ceremony", "Noun", "nghi lễ"),
      v!("Custom", "Noun", "phong tục"),
      v!("Celebrate", "Verb", "kỷ niệm, ăn mừng"),
      v!("Costume", "Noun", "trang phục truyền thống"),
      v!("Heritage", "Noun", "di sản"),
      v!("Lunar New Year", "Phrase", "Tết Nguyên Đán"),
    ],
    grammar: &[
      g!(
        "Used to",
        "S + used to + V",
        "Thói quen, phong tục trong quá khứ nay không còn.",
        "People used to write wishes on red paper."
      ),
      g!(
        "Phân từ làm tính từ",
        "V-ing / V3 + N",
        "Phân từ đứng trước danh từ mang nghĩa chủ động hoặc bị động.",
        "The decorated streets attract many visitors."
      ),
    ],
  },
  LessonDef {
    id: 28,
    level: "B2",
    topic: "Khoa học & Khám phá",
    vocabulary: &[
      v!("Experiment", "N/V", "thí nghiệm; làm thí nghiệm"),
      v!("Discover", "Verb", "khám phá"),
      v!("Theory", "Noun", "lý thuyết"),
      v!("Evidence", "Noun", "bằng chứng"),
      v!("Laboratory", "Noun", "phòng thí nghiệm"),
      v!("Gravity", "Noun", "trọng lực"),
      v!("Species", "Noun", "loài"),
      v!("DNA", "Acronym", "vật chất di truyền"),
    ],
    grammar: &[
      g!(
        "Câu hỏi gián tiếp",
        "Could you tell me + wh- + S + V?",
        "Hỏi lịch sự; trật tự từ như câu trần thuật.",
        "Could you tell me how the experiment works?"
      ),
      g!(
        "So sánh nhất",
        "the + Adj-est / the most + Adj",
        "Nêu kỷ lục hoặc phát hiện nổi bật nhất.",
        "It is the oldest fossil ever found."
      ),
    ],
  },
  chest!(29, "B2", "THỬ THÁCH B2"),
  // ---------------- C1 ----------------
  LessonDef {
    id: 30,
    level: "C1",
    topic: "Tranh luận & Thuyết phục",
    vocabulary: &[
      v!("Argue", "Verb", "tranh luận"),
      v!("Persuade", "Verb", "thuyết phục"),
      v!("Viewpoint", "Noun", "quan điểm"),
      v!("Convincing", "Adjective", "có sức thuyết phục"),
      v!("Contradict", "Verb", "phản bác, mâu thuẫn với"),
      v!("Concede", "Verb", "thừa nhận, nhượng bộ"),
      v!("Nevertheless", "Adverb", "tuy vậy"),
      v!("Counterargument", "Noun", "lập luận phản bác"),
    ],
    grammar: &[
      g!(
        "Đảo ngữ phủ định",
        "Never/Rarely/Not only + trợ động từ + S + V",
        "Nhấn mạnh trong văn tranh luận trang trọng.",
        "Never have I heard such a weak argument."
      ),
      g!(
        "Liên từ nhượng bộ",
        "although / even though / whereas + mệnh đề",
        "Thừa nhận một ý trước khi phản bác.",
        "Although the plan is costly, it will pay off."
      ),
    ],
  },
  LessonDef {
    id: 31,
    level: "C1",
    topic: "Thành ngữ & Cách diễn đạt",
    vocabulary: &[
      v!("Break the ice", "Idiom", "phá vỡ sự ngượng ngùng ban đầu"),
      v!("Piece of cake", "Idiom", "việc quá dễ"),
      v!("Hit the books", "Idiom", "học bài chăm chỉ"),
      v!("Under the weather", "Idiom", "thấy trong người không khỏe"),
      v!("Once in a blue moon", "Idiom", "hiếm khi"),
      v!("Cost an arm and a leg", "Idiom", "đắt cắt cổ"),
      v!("Spill the beans", "Idiom", "lỡ tiết lộ bí mật"),
      v!("Call it a day", "Idiom", "nghỉ, dừng công việc"),
    ],
    grammar: &[
      g!(
        "Dùng thành ngữ trong câu",
        "S + V + idiom",
        "Thành ngữ giữ nguyên dạng, không dịch từng từ.",
        "The final test was a piece of cake."
      ),
      g!(
        "Cụm động từ",
        "V + tiểu từ (up/off/out...)",
        "Nghĩa thay đổi theo tiểu từ đi kèm.",
        "They called off the meeting at the last minute."
      ),
    ],
  },
  chest!(32, "C1", "Rương C1/1"),
  LessonDef {
    id: 33,
    level: "C1",
    topic: "Chính trị & Xã hội",
    vocabulary: &[
      v!("Government", "Noun", "chính phủ"),
      v!("Policy", "Noun", "chính sách"),
      v!("Election", "Noun", "cuộc bầu cử"),
      v!("Citizen", "Noun", "công dân"),
      v!("Reform", "N/V", "cuộc cải cách; cải cách"),
      v!("Inequality", "Noun", "sự bất bình đẳng"),
      v!("Welfare", "Noun", "phúc lợi"),
      v!("NGO", "Acronym", "tổ chức phi chính phủ"),
    ],
    grammar: &[
      g!(
        "Danh hóa",
        "V/Adj → N (decide → decision)",
        "Văn phong trang trọng ưu tiên cụm danh từ.",
        "The decision to raise taxes was unpopular."
      ),
      g!(
        "Câu chẻ",
        "It is/was + X + that + mệnh đề",
        "Nhấn mạnh một thành phần của câu.",
        "It was the new policy that caused the protest."
      ),
    ],
  },
  LessonDef {
    id: 34,
    level: "C1",
    topic: "Nghệ thuật & Văn học",
    vocabulary: &[
      v!("Novel", "Noun", "tiểu thuyết"),
      v!("Metaphor", "Noun", "ẩn dụ"),
      v!("Character", "Noun", "nhân vật"),
      v!("Plot", "Noun", "cốt truyện"),
      v!("Exhibition", "Noun", "triển lãm"),
      v!("Masterpiece", "Noun", "kiệt tác"),
      v!("Critic", "Noun", "nhà phê bình"),
      v!("Aesthetic", "N/Adj", "mỹ học; mang tính thẩm mỹ"),
    ],
    grammar: &[
      g!(
        "Mệnh đề quan hệ rút gọn",
        "N + V-ing / V3",
        "Lược bỏ đại từ quan hệ và động từ \"be\".",
        "The novel, written in 1925, is still popular."
      ),
      g!(
        "Thể giả định",
        "suggest/demand + (that) + S + V nguyên mẫu",
        "Sau động từ đề nghị và yêu cầu.",
        "The critic suggested that the gallery extend the exhibition."
      ),
    ],
  },
  chest!(35, "C1", "THỬ THÁCH C1"),
  // ---------------- C2 ----------------
  LessonDef {
    id: 36,
    level: "C2",
    topic: "Ngôn ngữ học thuật",
    vocabulary: &[
      v!("Hypothesis", "Noun", "giả thuyết"),
      v!("Methodology", "Noun", "phương pháp luận"),
      v!("Empirical", "Adjective", "thực nghiệm"),
      v!("Paradigm", "Noun", "hệ hình, mô thức"),
      v!("Synthesis", "Noun", "sự tổng hợp"),
      v!("Cite", "Verb", "trích dẫn"),
      v!("Peer review", "Phrase", "bình duyệt"),
      v!("Abstract", "N/Adj", "bản tóm tắt; trừu tượng"),
    ],
    grammar: &[
      g!(
        "Rào đón học thuật",
        "appear to / tend to / arguably",
        "Giảm mức khẳng định trong văn học thuật.",
        "The data appear to support the hypothesis."
      ),
      g!(
        "Bị động vô nhân xưng",
        "It can be argued/shown that + mệnh đề",
        "Tránh ngôi thứ nhất trong bài nghiên cứu.",
        "It can be shown that the method generalizes."
      ),
    ],
  },
  LessonDef {
    id: 37,
    level: "C2",
    topic: "Sắc thái & Ẩn dụ",
    vocabulary: &[
      v!("Connotation", "Noun", "nghĩa hàm ẩn"),
      v!("Nuance", "Noun", "sắc thái"),
      v!("Irony", "Noun", "sự mỉa mai"),
      v!("Understatement", "Noun", "lối nói giảm"),
      v!("Euphemism", "Noun", "uyển ngữ"),
      v!("Ambiguous", "Adjective", "mơ hồ, nhiều nghĩa"),
      v!("Evoke", "Verb", "gợi lên"),
      v!("Subtle", "Adjective", "tinh tế"),
    ],
    grammar: &[
      g!(
        "Nói giảm nói tránh",
        "pass away / let go / senior",
        "Uyển ngữ thay cho cách nói trực tiếp.",
        "Her grandfather passed away last spring."
      ),
      g!(
        "Câu hỏi tu từ",
        "Wh-/Aux + S + V? (không chờ trả lời)",
        "Tạo hiệu ứng, không nhằm lấy thông tin.",
        "Who wouldn't want a second chance?"
      ),
    ],
  },
  chest!(38, "C2", "Rương C2/1"),
  LessonDef {
    id: 39,
    level: "C2",
    topic: "Phong cách & Tu từ",
    vocabulary: &[
      v!("Rhetoric", "Noun", "thuật hùng biện"),
      v!("Register", "Noun", "ngữ vực, phong cách ngôn ngữ"),
      v!("Coherence", "Noun", "tính mạch lạc"),
      v!("Eloquent", "Adjective", "hùng hồn, lưu loát"),
      v!("Concise", "Adjective", "súc tích"),
      v!("Verbose", "Adjective", "dài dòng"),
      v!("Alliteration", "Noun", "điệp phụ âm đầu"),
      v!("Paraphrase", "N/V", "lối diễn đạt lại; diễn đạt lại"),
    ],
    grammar: &[
      g!(
        "Cấu trúc song song",
        "X, Y and Z cùng dạng ngữ pháp",
        "Các vế liệt kê phải cùng loại từ hoặc cùng cấu trúc.",
        "She likes reading, writing and painting."
      ),
      g!(
        "Tránh lặp từ",
        "đại từ / từ đồng nghĩa thay thế",
        "Dùng từ thay thế để giữ mạch lạc mà không lặp.",
        "The mayor praised the plan; she called it bold."
      ),
    ],
  },
  chest!(40, "C2", "THỬ THÁCH C1-C2"),
];

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::CefrLevel;

  #[test]
  fn ids_are_strictly_increasing() {
    for pair in LESSONS.windows(2) {
      assert!(pair[0].id < pair[1].id, "ids out of order at {}", pair[1].id);
    }
  }

  #[test]
  fn every_level_tag_is_known() {
    for def in LESSONS {
      assert!(
        CefrLevel::parse(def.level).is_some(),
        "lesson {} has unknown level tag '{}'",
        def.id,
        def.level
      );
    }
  }

  #[test]
  fn review_entries_carry_no_content() {
    for def in LESSONS {
      if def.topic.contains("Rương") || def.topic.contains("THỬ THÁCH") {
        assert!(def.vocabulary.is_empty(), "chest {} has vocabulary", def.id);
        assert!(def.grammar.is_empty(), "chest {} has grammar", def.id);
      }
    }
  }

  #[test]
  fn greetings_lesson_has_the_expected_shape() {
    let first = &LESSONS[0];
    assert_eq!(first.id, 1);
    assert_eq!(first.topic, "Chào hỏi & Giới thiệu");
    assert_eq!(first.vocabulary.len(), 20);
    assert_eq!(first.grammar.len(), 5);
  }

  #[test]
  fn every_level_has_lessons() {
    for level in CefrLevel::ALL {
      assert!(
        LESSONS.iter().any(|d| d.level == level.as_str()),
        "no lessons tagged {level}"
      );
    }
  }
}
